use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

use super::config::GraphConfig;
use super::error::GraphError;
use super::graph::MusicGraph;
use super::handlers::GraphHandlers;
use super::highlight::Focus;
use super::legend::Legend;
use super::load::load_graph;
use super::render::{EdgeLayer, LegendLayer, NameTooltip, NodeLayer, Tooltip};
use super::simulation::Point;
use super::state::VisualizerState;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Loads the artist dataset and renders it once available. Load failures
/// propagate to the nearest `ErrorBoundary`.
#[component]
pub fn ArtistGraph(
	#[prop(optional)] config: GraphConfig,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let config = GraphConfig {
		width: width.unwrap_or(config.width),
		height: height.unwrap_or(config.height),
		..config
	};
	let loaded: RwSignal<Option<Result<Arc<MusicGraph>, GraphError>>> = RwSignal::new(None);

	let url = config.dataset_url.clone();
	Effect::new(move |_| {
		let url = url.clone();
		spawn_local(async move {
			let result = load_graph(&url).await.map(Arc::new);
			loaded.set(Some(result));
		});
	});

	view! {
		{move || loaded.with(Option::is_none).then(|| view! { <p class="graph-loading">"Loading graph..."</p> })}
		{move || {
			loaded
				.get()
				.map(|result| {
					result.map(|graph| view! { <GraphCanvas graph=graph config=config.clone() /> })
				})
		}}
	}
}

#[component]
fn GraphCanvas(graph: Arc<MusicGraph>, config: GraphConfig) -> impl IntoView {
	let legend = Arc::new(Legend::from_graph(&graph));
	let state = Rc::new(RefCell::new(VisualizerState::new(graph.clone(), &config)));
	let positions = RwSignal::new(state.borrow().simulation.positions());

	let handlers = GraphHandlers {
		state: state.clone(),
		svg_ref: NodeRef::new(),
		focus: RwSignal::new(Focus::None),
		hovered_edge: RwSignal::new(None),
		tooltip: RwSignal::new(Tooltip::default()),
	};
	let (focus, hovered_edge, tooltip, svg_ref) = (
		handlers.focus,
		handlers.hovered_edge,
		handlers.tooltip,
		handlers.svg_ref,
	);

	start_animation(state, positions);

	// Drags track the pointer on the window so leaving the canvas mid-gesture
	// doesn't drop the node.
	let (on_move, on_up) = (handlers.clone(), handlers.clone());
	let move_handle = window_event_listener(ev::mousemove, move |ev| on_move.pointer_move(&ev));
	let up_handle = window_event_listener(ev::mouseup, move |_| on_up.pointer_release());
	on_cleanup(move || {
		move_handle.remove();
		up_handle.remove();
	});

	view! {
		<svg
			node_ref=svg_ref
			class="music-graph"
			width=config.width.to_string()
			height=config.height.to_string()
		>
			<LegendLayer
				graph=graph.clone()
				legend=legend.clone()
				focus=focus
				hovered_edge=hovered_edge
				handlers=handlers.clone()
			/>
			<EdgeLayer
				graph=graph.clone()
				legend=legend
				positions=positions
				focus=focus
				handlers=handlers.clone()
			/>
			<NodeLayer graph=graph positions=positions focus=focus handlers=handlers />
		</svg>
		<NameTooltip tooltip=tooltip />
	}
}

/// One animation frame: tick the layout and publish the new positions.
/// Returns false once the view owning `positions` has been disposed.
fn advance(state: &RefCell<VisualizerState>, positions: RwSignal<Vec<Point>>) -> bool {
	if positions.is_disposed() {
		return false;
	}
	if let Some(frame) = state.borrow_mut().tick() {
		positions.set(frame);
	}
	true
}

/// Drive the simulation from `requestAnimationFrame`. The loop keeps polling
/// after the layout settles so a drag can wake it. When the graph unmounts it
/// stops rescheduling and drops its state and its own callback.
fn start_animation(state: Rc<RefCell<VisualizerState>>, positions: RwSignal<Vec<Point>>) {
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let (mut state, mut animate_inner) = (Some(state), Some(animate.clone()));

	*animate.borrow_mut() = Some(Closure::new(move || {
		let live = state.as_ref().is_some_and(|s| advance(s, positions));
		if !live {
			state.take();
			animate_inner.take();
			return;
		}
		if let Some(animate) = &animate_inner {
			request_frame(animate);
		}
	}));
	request_frame(&animate);
}

fn request_frame(animate: &FrameCallback) {
	if let (Some(window), Some(cb)) = (web_sys::window(), animate.borrow().as_ref()) {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}
