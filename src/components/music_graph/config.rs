/// Tunables for the visualizer. Defaults reproduce the original layout.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	pub dataset_url: String,
	pub width: f64,
	pub height: f64,
	pub link_distance: f64,
	pub collide_radius: f64,
	pub genre_x_strength: f64,
	pub genre_y_strength: f64,
	/// Alpha target held while a node is being dragged.
	pub drag_alpha_target: f64,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			dataset_url: "top50.json".into(),
			width: 960.0,
			height: 600.0,
			link_distance: 30.0,
			collide_radius: 30.0,
			genre_x_strength: 0.02,
			genre_y_strength: 0.1,
			drag_alpha_target: 0.3,
		}
	}
}
