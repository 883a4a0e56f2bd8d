use std::fmt;

use serde::{Deserialize, Deserializer};

/// Node identifier as found in the dataset. Numbers and strings are both
/// accepted and compared by their textual form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub String);

impl<'de> Deserialize<'de> for NodeId {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Raw {
			Text(String),
			Int(i64),
			Float(f64),
		}

		Ok(match Raw::deserialize(deserializer)? {
			Raw::Text(s) => NodeId(s),
			Raw::Int(n) => NodeId(n.to_string()),
			Raw::Float(f) => NodeId(f.to_string()),
		})
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for NodeId {
	fn from(s: &str) -> Self {
		NodeId(s.to_owned())
	}
}

#[derive(Clone, Debug, Deserialize)]
pub struct ArtistNode {
	pub id: NodeId,
	pub name: String,
	#[serde(default)]
	pub img: String,
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub genres: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RelationEdge {
	pub source: NodeId,
	pub target: NodeId,
	#[serde(rename = "type")]
	pub kind: String,
}

/// Raw contents of the dataset file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
	#[serde(default)]
	pub nodes: Vec<ArtistNode>,
	#[serde(default)]
	pub edges: Vec<RelationEdge>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_string_and_numeric_ids() {
		let data: GraphData = serde_json::from_str(
			r#"{
				"nodes": [
					{"id": "a1", "name": "Drake", "img": "d.jpg", "url": "https://x/d", "genres": ["rap"]},
					{"id": 7, "name": "Disclosure", "img": "c.jpg", "url": "https://x/c", "genres": []}
				],
				"edges": [{"source": "a1", "target": 7, "type": "collab"}]
			}"#,
		)
		.unwrap();

		assert_eq!(data.nodes[0].id, NodeId::from("a1"));
		assert_eq!(data.nodes[1].id, NodeId::from("7"));
		assert_eq!(data.edges[0].target, NodeId::from("7"));
		assert_eq!(data.edges[0].kind, "collab");
	}

	#[test]
	fn missing_genres_default_to_empty() {
		let node: ArtistNode =
			serde_json::from_str(r#"{"id": "x", "name": "X", "img": "", "url": "", "popularity": 90}"#)
				.unwrap();
		assert!(node.genres.is_empty());
	}
}
