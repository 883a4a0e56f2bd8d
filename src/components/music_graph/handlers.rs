use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::highlight::Focus;
use super::render::Tooltip;
use super::state::VisualizerState;

/// Event entry points for one mounted graph. Views clone this into their
/// listeners; every method runs to completion against the shared state.
#[derive(Clone)]
pub struct GraphHandlers {
	pub state: Rc<RefCell<VisualizerState>>,
	pub svg_ref: NodeRef<leptos::svg::Svg>,
	pub focus: RwSignal<Focus>,
	pub hovered_edge: RwSignal<Option<String>>,
	pub tooltip: RwSignal<Tooltip>,
}

impl GraphHandlers {
	/// Pointer position in canvas coordinates.
	fn pointer(&self, ev: &MouseEvent) -> Option<(f64, f64)> {
		let svg = self.svg_ref.get()?;
		let rect = svg.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	}

	pub fn node_enter(&self, idx: usize, ev: &MouseEvent) {
		let name = self.state.borrow().graph.nodes[idx].name.clone();
		self.focus.set(Focus::Node(idx));
		self.tooltip.set(Tooltip {
			text: name,
			left: ev.page_x() as f64,
			top: ev.page_y() as f64,
			visible: true,
		});
	}

	pub fn node_leave(&self) {
		self.focus.set(Focus::None);
		self.tooltip.update(|t| t.visible = false);
	}

	pub fn node_click(&self, idx: usize) {
		let mut state = self.state.borrow_mut();
		if !state.take_click() {
			return;
		}
		if let Some(window) = web_sys::window() {
			let _ = window.open_with_url(&state.graph.nodes[idx].url);
		}
	}

	pub fn node_press(&self, idx: usize, ev: &MouseEvent) {
		ev.prevent_default();
		if let Some((x, y)) = self.pointer(ev) {
			self.state.borrow_mut().drag_start(idx, x, y);
		}
	}

	pub fn pointer_move(&self, ev: &MouseEvent) {
		let mut state = self.state.borrow_mut();
		if !state.is_dragging() {
			return;
		}
		if let Some((x, y)) = self.pointer(ev) {
			state.drag_move(x, y);
		}
	}

	pub fn pointer_release(&self) {
		self.state.borrow_mut().drag_end();
	}

	pub fn legend_enter(&self, kind: String) {
		self.focus.set(Focus::EdgeType(kind));
	}

	pub fn legend_leave(&self) {
		self.focus.set(Focus::None);
	}

	pub fn edge_enter(&self, kind: String) {
		self.hovered_edge.set(Some(kind));
	}

	/// Clears only the edge's own label emphasis. Labels lit by the hovered
	/// node, if any, stay lit.
	pub fn edge_leave(&self) {
		self.hovered_edge.set(None);
	}
}
