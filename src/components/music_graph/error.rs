use thiserror::Error;

/// Failures that prevent the graph from initializing.
#[derive(Clone, Debug, Error)]
pub enum GraphError {
	#[error("failed to fetch {url}: {message}")]
	Fetch { url: String, message: String },

	#[error("fetching {url} returned HTTP {status}")]
	Status { url: String, status: u16 },

	#[error("invalid graph data in {url}: {message}")]
	Decode { url: String, message: String },

	#[error("edge {edge} references unknown node '{id}'")]
	MissingNode { edge: usize, id: String },
}
