//! Positional bias by genre. Hip hop and rap drift right of center, house
//! drifts left, and everything else is pulled toward the right edge.

fn joined(genres: &[String]) -> String {
	genres.join("-")
}

pub fn genre_x(genres: &[String], width: f64) -> f64 {
	let genres = joined(genres);
	if genres.contains("hip hop") || genres.contains("rap") {
		width / 4.0 * 3.0
	} else if genres.contains("house") {
		width / 4.0
	} else {
		width
	}
}

/// Vertical target. House was meant to rise to the upper quarter, but that
/// rule only fired on an empty genre string, so every node sits on the
/// horizontal midline.
pub fn genre_y(_genres: &[String], height: f64) -> f64 {
	height / 2.0
}
