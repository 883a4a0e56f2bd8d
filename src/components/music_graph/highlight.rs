//! What the graph looks like for a given hover focus. Everything here is a
//! pure function of the graph and the focus, so leaving a hover is just a
//! matter of setting the focus back to `Focus::None`.

use super::graph::MusicGraph;

pub const NODE_SIZE: f64 = 50.0;
pub const NEIGHBOR_SIZE: f64 = 66.0;
pub const HOVERED_SIZE: f64 = 80.0;
pub const TRANSITION_MS: u32 = 200;
pub const TOOLTIP_OPACITY: f64 = 0.7;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Focus {
	#[default]
	None,
	/// Pointer is over a node image.
	Node(usize),
	/// Pointer is over a legend entry.
	EdgeType(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeLook {
	pub size: f64,
	pub greyed: bool,
}

impl NodeLook {
	/// Image offset that keeps it centred on the node.
	pub fn offset(&self) -> f64 {
		-self.size / 2.0
	}
}

impl Default for NodeLook {
	fn default() -> Self {
		Self {
			size: NODE_SIZE,
			greyed: false,
		}
	}
}

pub fn edge_opacity(graph: &MusicGraph, focus: &Focus, edge: usize) -> f64 {
	let edge = &graph.edges[edge];
	let visible = match focus {
		Focus::None => true,
		Focus::Node(n) => edge.touches(*n),
		Focus::EdgeType(kind) => edge.kind == *kind,
	};
	if visible { 1.0 } else { 0.0 }
}

pub fn node_look(graph: &MusicGraph, focus: &Focus, node: usize) -> NodeLook {
	match focus {
		Focus::None => NodeLook::default(),
		Focus::Node(hovered) => {
			let adjacent = graph.is_adjacent(*hovered, node);
			let size = if node == *hovered {
				HOVERED_SIZE
			} else if adjacent {
				NEIGHBOR_SIZE
			} else {
				NODE_SIZE
			};
			NodeLook {
				size,
				greyed: node != *hovered && !adjacent,
			}
		}
		Focus::EdgeType(kind) => NodeLook {
			size: if graph.touches_type(node, kind) {
				NEIGHBOR_SIZE
			} else {
				NODE_SIZE
			},
			greyed: false,
		},
	}
}

/// Whether the legend label for `kind` is emphasised. `hovered_edge` is the
/// type of the edge under the pointer, if any. Edge hover and node focus are
/// independent sources: leaving an edge drops only its own emphasis, so labels
/// lit by a hovered node stay lit.
pub fn legend_hover(
	graph: &MusicGraph,
	focus: &Focus,
	hovered_edge: Option<&str>,
	kind: &str,
) -> bool {
	if hovered_edge == Some(kind) {
		return true;
	}
	match focus {
		Focus::Node(n) => graph.touches_type(*n, kind),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::music_graph::graph::tests::sample;

	fn snapshot(graph: &MusicGraph, focus: &Focus) -> (Vec<f64>, Vec<NodeLook>, Vec<bool>) {
		let kinds = graph.edge_types();
		(
			(0..graph.edges.len())
				.map(|e| edge_opacity(graph, focus, e))
				.collect(),
			(0..graph.nodes.len())
				.map(|n| node_look(graph, focus, n))
				.collect(),
			kinds
				.iter()
				.map(|k| legend_hover(graph, focus, None, k))
				.collect(),
		)
	}

	#[test]
	fn default_look_is_full_opacity_and_base_size() {
		let graph = sample();
		let (edges, nodes, legend) = snapshot(&graph, &Focus::None);
		assert!(edges.iter().all(|&o| o == 1.0));
		assert!(nodes.iter().all(|l| l.size == NODE_SIZE && !l.greyed));
		assert!(legend.iter().all(|&h| !h));
	}

	#[test]
	fn hovering_a_node_highlights_its_neighbourhood() {
		let graph = sample();
		let focus = Focus::Node(0);

		assert_eq!(edge_opacity(&graph, &focus, 0), 1.0);
		assert_eq!(edge_opacity(&graph, &focus, 1), 0.0);

		assert_eq!(node_look(&graph, &focus, 0).size, HOVERED_SIZE);
		assert_eq!(node_look(&graph, &focus, 1).size, NEIGHBOR_SIZE);
		assert!(!node_look(&graph, &focus, 1).greyed);
		assert!(node_look(&graph, &focus, 2).greyed);
		assert!(node_look(&graph, &focus, 3).greyed);

		assert!(legend_hover(&graph, &focus, None, "collab"));
		assert!(!legend_hover(&graph, &focus, None, "genre"));
	}

	#[test]
	fn hover_out_restores_default_state() {
		let graph = sample();
		let before = snapshot(&graph, &Focus::None);
		let during = snapshot(&graph, &Focus::Node(1));
		assert_ne!(before, during);
		let after = snapshot(&graph, &Focus::None);
		assert_eq!(before, after);
	}

	#[test]
	fn legend_focus_filters_edges_and_enlarges_incident_nodes() {
		let graph = sample();
		let focus = Focus::EdgeType("genre".into());

		assert_eq!(edge_opacity(&graph, &focus, 0), 0.0);
		assert_eq!(edge_opacity(&graph, &focus, 1), 1.0);

		let sizes: Vec<_> = (0..4).map(|n| node_look(&graph, &focus, n).size).collect();
		assert_eq!(sizes, vec![NODE_SIZE, NEIGHBOR_SIZE, NEIGHBOR_SIZE, NODE_SIZE]);
		assert!((0..4).all(|n| !node_look(&graph, &focus, n).greyed));
	}

	#[test]
	fn hovered_edge_emphasises_its_legend_label() {
		let graph = sample();
		assert!(legend_hover(&graph, &Focus::None, Some("genre"), "genre"));
		assert!(!legend_hover(&graph, &Focus::None, Some("genre"), "collab"));
	}

	#[test]
	fn leaving_an_edge_keeps_node_hover_labels() {
		let graph = sample();
		let focus = Focus::Node(0);
		assert!(legend_hover(&graph, &focus, Some("genre"), "genre"));

		assert!(!legend_hover(&graph, &focus, None, "genre"));
		assert!(legend_hover(&graph, &focus, None, "collab"));
	}

	#[test]
	fn image_offset_centres_the_image() {
		assert_eq!(NodeLook::default().offset(), -25.0);
		assert_eq!(
			NodeLook {
				size: HOVERED_SIZE,
				greyed: false
			}
			.offset(),
			-40.0
		);
	}
}
