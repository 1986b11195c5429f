use thiserror::Error;

/// Failures of the per-frame parse/layout/draw pipeline.
///
/// None of these are fatal: a failed frame stays background-only and a
/// failed edge is skipped while the rest of the frame still paints.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
	/// The graph spec is empty or whitespace-only.
	#[error("graph spec is empty")]
	EmptyGraph,

	/// Fewer than one distinct vertex was parsed.
	#[error("graph has {0} vertices, need at least 1")]
	InsufficientVertices(usize),

	/// An edge references a vertex missing from the coordinate map.
	#[error("edge references unknown vertex '{0}'")]
	UnknownVertex(String),

	/// An edge token holds fewer than two vertex identifiers.
	#[error("edge token '{0}' has no second endpoint")]
	MalformedEdge(String),
}
