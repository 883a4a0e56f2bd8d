use gloo_net::http::Request;
use log::{error, info};

use super::error::GraphError;
use super::graph::MusicGraph;
use super::types::GraphData;

fn check_status(url: &str, status: u16) -> Result<(), GraphError> {
	if (200..300).contains(&status) {
		Ok(())
	} else {
		Err(GraphError::Status {
			url: url.to_owned(),
			status,
		})
	}
}

/// Decode a dataset body fetched from `url`.
pub fn parse_graph(url: &str, body: &str) -> Result<GraphData, GraphError> {
	serde_json::from_str(body).map_err(|e| GraphError::Decode {
		url: url.to_owned(),
		message: e.to_string(),
	})
}

/// Fetch and decode the dataset at `url`.
pub async fn fetch_graph(url: &str) -> Result<GraphData, GraphError> {
	let fetch_error = |e: gloo_net::Error| GraphError::Fetch {
		url: url.to_owned(),
		message: e.to_string(),
	};

	let response = Request::get(url).send().await.map_err(fetch_error)?;
	check_status(url, response.status())?;
	let body = response.text().await.map_err(fetch_error)?;
	parse_graph(url, &body)
}

/// Fetch the dataset and bind its edges. Any failure is fatal for the page.
pub async fn load_graph(url: &str) -> Result<MusicGraph, GraphError> {
	let result = fetch_graph(url).await.and_then(MusicGraph::bind);
	match &result {
		Ok(graph) => info!(
			"Loaded {} artists and {} relationships from {}",
			graph.nodes.len(),
			graph.edges.len(),
			url
		),
		Err(e) => error!("{e}"),
	}
	result
}
