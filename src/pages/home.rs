use leptos::prelude::*;

use crate::components::music_graph::{ArtistGraph, GraphConfig};

/// Current browser viewport, if there is one.
fn viewport() -> (Option<f64>, Option<f64>) {
	let Some(window) = web_sys::window() else {
		return (None, None);
	};
	(
		window.inner_width().ok().and_then(|w| w.as_f64()),
		window.inner_height().ok().and_then(|h| h.as_f64()),
	)
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let (width, height) = viewport();
	let config = GraphConfig {
		dataset_url: "top50.json".into(),
		..GraphConfig::default()
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<ArtistGraph config=config width=width height=height />
				<div class="graph-overlay">
					<h1>"Top 50 Artists"</h1>
					<p class="subtitle">
						"Hover an artist to see their connections. Drag to reposition. Click to open."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
