use std::sync::Arc;

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::graph::MusicGraph;
use super::handlers::GraphHandlers;
use super::highlight::{
	Focus, TOOLTIP_OPACITY, TRANSITION_MS, edge_opacity, legend_hover, node_look,
};
use super::legend::{LEGEND_ORIGIN, LEGEND_ROW_HEIGHT, LEGEND_SHAPE_RADIUS, Legend};
use super::simulation::Point;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
	pub text: String,
	pub left: f64,
	pub top: f64,
	pub visible: bool,
}

#[component]
pub fn LegendLayer(
	graph: Arc<MusicGraph>,
	legend: Arc<Legend>,
	focus: RwSignal<Focus>,
	hovered_edge: RwSignal<Option<String>>,
	handlers: GraphHandlers,
) -> impl IntoView {
	let cells = legend
		.entries
		.iter()
		.enumerate()
		.map(|(i, entry)| {
			let (graph, kind) = (graph.clone(), entry.kind.clone());
			let highlighted = move || {
				focus.with(|f| {
					hovered_edge.with(|h| legend_hover(&graph, f, h.as_deref(), &kind))
				})
			};
			let (enter, leave, kind) = (handlers.clone(), handlers.clone(), entry.kind.clone());

			view! {
				<g
					class="cell"
					transform=format!("translate(0, {})", i as f64 * LEGEND_ROW_HEIGHT)
					on:mouseenter=move |_: MouseEvent| enter.legend_enter(kind.clone())
					on:mouseleave=move |_: MouseEvent| leave.legend_leave()
				>
					<circle
						class="swatch"
						r=LEGEND_SHAPE_RADIUS.to_string()
						style=format!("fill: {}", entry.color)
					/>
					<text
						class="legendlabel"
						class:legend-hover=highlighted
						transform=format!("translate({}, {})", LEGEND_SHAPE_RADIUS * 2.0 + 5.0, LEGEND_SHAPE_RADIUS)
					>
						{entry.kind.clone()}
					</text>
				</g>
			}
		})
		.collect_view();

	view! {
		<g
			class="category-legend"
			transform=format!("translate({},{})", LEGEND_ORIGIN.0, LEGEND_ORIGIN.1)
		>
			{cells}
		</g>
	}
}

#[component]
pub fn EdgeLayer(
	graph: Arc<MusicGraph>,
	legend: Arc<Legend>,
	positions: RwSignal<Vec<Point>>,
	focus: RwSignal<Focus>,
	handlers: GraphHandlers,
) -> impl IntoView {
	let lines = graph
		.edges
		.iter()
		.enumerate()
		.map(|(i, edge)| {
			let (s, t) = (edge.source, edge.target);
			let graph = graph.clone();
			let (enter, leave, kind) = (handlers.clone(), handlers.clone(), edge.kind.clone());

			view! {
				<line
					stroke=legend.color(&edge.kind)
					stroke-width="1"
					style=format!("transition: opacity {TRANSITION_MS}ms")
					opacity=move || focus.with(|f| edge_opacity(&graph, f, i)).to_string()
					x1=move || positions.with(|p| p[s].x).to_string()
					y1=move || positions.with(|p| p[s].y).to_string()
					x2=move || positions.with(|p| p[t].x).to_string()
					y2=move || positions.with(|p| p[t].y).to_string()
					on:mouseenter=move |_: MouseEvent| enter.edge_enter(kind.clone())
					on:mouseleave=move |_: MouseEvent| leave.edge_leave()
				/>
			}
		})
		.collect_view();

	view! { <g class="links">{lines}</g> }
}

#[component]
pub fn NodeLayer(
	graph: Arc<MusicGraph>,
	positions: RwSignal<Vec<Point>>,
	focus: RwSignal<Focus>,
	handlers: GraphHandlers,
) -> impl IntoView {
	let transition = format!(
		"transition: x {0}ms, y {0}ms, width {0}ms, height {0}ms",
		TRANSITION_MS
	);

	let nodes = graph
		.nodes
		.iter()
		.enumerate()
		.map(|(i, node)| {
			let look = {
				let graph = graph.clone();
				Memo::new(move |_| focus.with(|f| node_look(&graph, f, i)))
			};
			let (press, enter, leave, click) = (
				handlers.clone(),
				handlers.clone(),
				handlers.clone(),
				handlers.clone(),
			);

			view! {
				<g
					class="node"
					transform=move || positions.with(|p| format!("translate({}, {})", p[i].x, p[i].y))
					on:mousedown=move |ev: MouseEvent| press.node_press(i, &ev)
				>
					<image
						href=node.img.clone()
						class:greyed=move || look.get().greyed
						x=move || look.get().offset().to_string()
						y=move || look.get().offset().to_string()
						width=move || look.get().size.to_string()
						height=move || look.get().size.to_string()
						style=transition.clone()
						on:mouseenter=move |ev: MouseEvent| enter.node_enter(i, &ev)
						on:mouseleave=move |_: MouseEvent| leave.node_leave()
						on:click=move |_: MouseEvent| click.node_click(i)
					/>
				</g>
			}
		})
		.collect_view();

	view! { <g class="nodes">{nodes}</g> }
}

#[component]
pub fn NameTooltip(tooltip: RwSignal<Tooltip>) -> impl IntoView {
	view! {
		<div
			class="tooltip"
			style:left=move || tooltip.with(|t| format!("{}px", t.left))
			style:top=move || tooltip.with(|t| format!("{}px", t.top))
			style:opacity=move || {
				let opacity = if tooltip.with(|t| t.visible) { TOOLTIP_OPACITY } else { 0.0 };
				opacity.to_string()
			}
			style:transition=format!("opacity {TRANSITION_MS}ms")
		>
			{move || tooltip.with(|t| t.text.clone())}
		</div>
	}
}
