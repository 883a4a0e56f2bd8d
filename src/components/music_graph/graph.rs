use std::collections::HashMap;

use super::error::GraphError;
use super::types::{ArtistNode, GraphData, NodeId};

/// An edge whose endpoints have been resolved to node indices.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundEdge {
	pub source: usize,
	pub target: usize,
	pub kind: String,
}

impl BoundEdge {
	pub fn touches(&self, node: usize) -> bool {
		self.source == node || self.target == node
	}
}

/// Artists and their relationships, with per-node incidence computed once at
/// load time so hover queries don't rescan every edge.
#[derive(Clone, Debug)]
pub struct MusicGraph {
	pub nodes: Vec<ArtistNode>,
	pub edges: Vec<BoundEdge>,
	incident: Vec<Vec<usize>>,
}

impl MusicGraph {
	pub fn bind(data: GraphData) -> Result<Self, GraphError> {
		let index: HashMap<_, _> = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| (node.id.clone(), i))
			.collect();
		let lookup = |edge: usize, id: &NodeId| {
			index.get(id).copied().ok_or_else(|| GraphError::MissingNode {
				edge,
				id: id.to_string(),
			})
		};

		let mut incident = vec![Vec::new(); data.nodes.len()];
		let mut edges = Vec::with_capacity(data.edges.len());
		for (i, edge) in data.edges.into_iter().enumerate() {
			let (source, target) = (lookup(i, &edge.source)?, lookup(i, &edge.target)?);
			incident[source].push(i);
			if target != source {
				incident[target].push(i);
			}
			edges.push(BoundEdge {
				source,
				target,
				kind: edge.kind,
			});
		}

		Ok(Self {
			nodes: data.nodes,
			edges,
			incident,
		})
	}

	pub fn incident_edges(&self, node: usize) -> impl Iterator<Item = &BoundEdge> {
		self.incident[node].iter().map(|&e| &self.edges[e])
	}

	/// True when an edge incident to `a` also touches `b`. Any node with at
	/// least one edge is adjacent to itself.
	pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
		self.incident_edges(a).any(|e| e.touches(b))
	}

	pub fn touches_type(&self, node: usize, kind: &str) -> bool {
		self.incident_edges(node).any(|e| e.kind == kind)
	}

	/// Distinct edge types in order of first appearance.
	pub fn edge_types(&self) -> Vec<&str> {
		let mut kinds: Vec<&str> = Vec::new();
		for edge in &self.edges {
			if !kinds.contains(&edge.kind.as_str()) {
				kinds.push(&edge.kind);
			}
		}
		kinds
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::components::music_graph::types::RelationEdge;

	pub(crate) fn artist(id: &str, genres: &[&str]) -> ArtistNode {
		ArtistNode {
			id: NodeId::from(id),
			name: id.to_uppercase(),
			img: format!("{id}.jpg"),
			url: format!("https://open.spotify.com/artist/{id}"),
			genres: genres.iter().map(|g| g.to_string()).collect(),
		}
	}

	pub(crate) fn relation(source: &str, target: &str, kind: &str) -> RelationEdge {
		RelationEdge {
			source: NodeId::from(source),
			target: NodeId::from(target),
			kind: kind.to_owned(),
		}
	}

	/// a-b collab, b-c genre, d isolated.
	pub(crate) fn sample() -> MusicGraph {
		MusicGraph::bind(GraphData {
			nodes: vec![
				artist("a", &["rap"]),
				artist("b", &["pop rap"]),
				artist("c", &["deep house"]),
				artist("d", &["pop"]),
			],
			edges: vec![relation("a", "b", "collab"), relation("b", "c", "genre")],
		})
		.unwrap()
	}

	#[test]
	fn binds_every_endpoint_to_a_node() {
		let graph = sample();
		for edge in &graph.edges {
			assert!(edge.source < graph.nodes.len());
			assert!(edge.target < graph.nodes.len());
		}
		assert_eq!(graph.edges[1].source, 1);
		assert_eq!(graph.edges[1].target, 2);
	}

	#[test]
	fn dangling_edge_is_an_error() {
		let err = MusicGraph::bind(GraphData {
			nodes: vec![artist("a", &[])],
			edges: vec![relation("a", "ghost", "collab")],
		})
		.unwrap_err();

		match err {
			GraphError::MissingNode { edge, id } => {
				assert_eq!(edge, 0);
				assert_eq!(id, "ghost");
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn adjacency_is_symmetric() {
		let graph = sample();
		let n = graph.nodes.len();
		for a in 0..n {
			for b in 0..n {
				assert_eq!(graph.is_adjacent(a, b), graph.is_adjacent(b, a), "{a} {b}");
			}
		}
		assert!(graph.is_adjacent(0, 1));
		assert!(!graph.is_adjacent(0, 2));
		assert!(!graph.is_adjacent(3, 0));
	}

	#[test]
	fn connected_node_is_adjacent_to_itself() {
		let graph = sample();
		assert!(graph.is_adjacent(0, 0));
		assert!(!graph.is_adjacent(3, 3));
	}

	#[test]
	fn edge_types_keep_first_seen_order() {
		let graph = sample();
		assert_eq!(graph.edge_types(), vec!["collab", "genre"]);
		assert!(graph.touches_type(1, "collab") && graph.touches_type(1, "genre"));
		assert!(!graph.touches_type(3, "collab"));
	}
}
