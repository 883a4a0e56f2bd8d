use super::graph::MusicGraph;

/// d3's `schemeCategory20`.
pub const CATEGORY20: [&str; 20] = [
	"#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
	"#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
	"#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

pub const LEGEND_ORIGIN: (f64, f64) = (20.0, 20.0);
pub const LEGEND_SHAPE_RADIUS: f64 = 5.0;
pub const LEGEND_ROW_HEIGHT: f64 = 18.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	pub kind: String,
	pub color: &'static str,
}

/// Ordinal color scale over the edge types present in the data.
#[derive(Clone, Debug, Default)]
pub struct Legend {
	pub entries: Vec<LegendEntry>,
}

impl Legend {
	pub fn from_graph(graph: &MusicGraph) -> Self {
		let entries = graph
			.edge_types()
			.into_iter()
			.enumerate()
			.map(|(i, kind)| LegendEntry {
				kind: kind.to_owned(),
				color: CATEGORY20[i % CATEGORY20.len()],
			})
			.collect();
		Self { entries }
	}

	/// Color for `kind`. Types outside the domain fall back to the first
	/// palette entry.
	pub fn color(&self, kind: &str) -> &'static str {
		self.entries
			.iter()
			.find(|e| e.kind == kind)
			.map(|e| e.color)
			.unwrap_or(CATEGORY20[0])
	}
}
