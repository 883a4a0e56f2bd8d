use std::sync::Arc;

use log::debug;

use super::config::GraphConfig;
use super::genre::{genre_x, genre_y};
use super::graph::MusicGraph;
use super::simulation::{ForceParams, Link, Point, Simulation};

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node_idx: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
	/// Set once the pointer moves during the gesture; the click that
	/// ends such a drag is swallowed.
	pub moved: bool,
}

/// Everything the event handlers and the animation loop share for one
/// mounted graph.
pub struct VisualizerState {
	pub graph: Arc<MusicGraph>,
	pub simulation: Simulation,
	pub drag: DragState,
	drag_alpha_target: f64,
	suppress_click: bool,
}

impl VisualizerState {
	pub fn new(graph: Arc<MusicGraph>, config: &GraphConfig) -> Self {
		let (width, height) = (config.width, config.height);
		let targets = graph
			.nodes
			.iter()
			.map(|n| Point {
				x: genre_x(&n.genres, width),
				y: genre_y(&n.genres, height),
			})
			.collect();
		let links = graph
			.edges
			.iter()
			.map(|e| Link {
				source: e.source,
				target: e.target,
			})
			.collect();
		let simulation = Simulation::new(
			targets,
			links,
			ForceParams {
				link_distance: config.link_distance,
				collide_radius: config.collide_radius,
				center: Point {
					x: width / 2.0,
					y: height / 2.0,
				},
				x_strength: config.genre_x_strength,
				y_strength: config.genre_y_strength,
			},
		);

		Self {
			graph,
			simulation,
			drag: DragState::default(),
			drag_alpha_target: config.drag_alpha_target,
			suppress_click: false,
		}
	}

	/// Advance the layout by one frame. Returns the new positions, or `None`
	/// when the simulation has settled and nothing moved.
	pub fn tick(&mut self) -> Option<Vec<Point>> {
		if !self.simulation.is_running() {
			return None;
		}
		self.simulation.step();
		Some(self.simulation.positions())
	}

	pub fn drag_start(&mut self, idx: usize, x: f64, y: f64) {
		self.simulation.set_alpha_target(self.drag_alpha_target);
		self.simulation.restart();

		let node = self.simulation.position(idx);
		self.simulation.fix(idx, node.x, node.y);
		self.drag = DragState {
			node_idx: Some(idx),
			start_x: x,
			start_y: y,
			node_start_x: node.x,
			node_start_y: node.y,
			moved: false,
		};
		self.suppress_click = false;
		debug!("Drag started on {}", self.graph.nodes[idx].name);
	}

	pub fn drag_move(&mut self, x: f64, y: f64) {
		let Some(idx) = self.drag.node_idx else {
			return;
		};
		let (dx, dy) = (x - self.drag.start_x, y - self.drag.start_y);
		if dx != 0.0 || dy != 0.0 {
			self.drag.moved = true;
		}
		self.simulation.fix(
			idx,
			self.drag.node_start_x + dx,
			self.drag.node_start_y + dy,
		);
	}

	pub fn drag_end(&mut self) {
		let Some(idx) = self.drag.node_idx.take() else {
			return;
		};
		self.simulation.set_alpha_target(0.0);
		self.simulation.release(idx);
		self.suppress_click = self.drag.moved;
		self.drag.moved = false;
		debug!("Drag ended on {}", self.graph.nodes[idx].name);
	}

	pub fn is_dragging(&self) -> bool {
		self.drag.node_idx.is_some()
	}

	/// Consume the click that follows a drag. Returns true when the click
	/// should navigate.
	pub fn take_click(&mut self) -> bool {
		!std::mem::take(&mut self.suppress_click)
	}
}
