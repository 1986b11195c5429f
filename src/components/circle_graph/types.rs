use std::rc::Rc;

/// A single edge between two vertex identifiers, in input order.
///
/// Duplicates are allowed; parallel edges paint twice, overlapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	pub source: String,
	pub target: String,
}

/// The parsed form of a graph spec string: the deduplicated, sorted
/// vertex set plus the edge list in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedGraph {
	pub vertices: Vec<String>,
	pub edges: Vec<Edge>,
}

/// A point on the canvas, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Per-edge color hook: maps (source, target) to a CSS color string.
pub type EdgeStyler = Rc<dyn Fn(&str, &str) -> String>;

/// Runtime render configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphStyle {
	/// Edge length of the square canvas, logical pixels.
	pub canvas_size: f64,
	/// Radius of each vertex circle.
	pub vertex_radius: f64,
	/// Inset subtracted from the layout circle's radius.
	pub border: f64,
	/// Paint each vertex identifier beside its circle.
	pub show_labels: bool,
}

impl Default for GraphStyle {
	fn default() -> Self {
		Self {
			canvas_size: 500.0,
			vertex_radius: 16.0,
			border: 0.0,
			show_labels: false,
		}
	}
}
