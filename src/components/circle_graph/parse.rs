use log::warn;

use super::error::GraphError;
use super::types::{Edge, ParsedGraph};

/// Parses a graph spec string into a sorted vertex set and an edge list.
///
/// The spec is comma-separated edge tokens, each two vertex identifiers
/// joined by a non-digit separator:
///
/// ```text
/// 1=2,2=3,3=1
/// ```
///
/// Vertex identifiers are digit runs; any run of non-digit characters acts
/// as a separator. The vertex set is deduplicated and sorted
/// lexicographically as strings, so `"10"` orders before `"2"`. The edge
/// list keeps input order and duplicates. A token with fewer than two
/// identifiers is a degenerate edge: it is logged and dropped from the
/// edge list, though its digits still count toward the vertex set.
pub fn parse(spec: &str) -> Result<ParsedGraph, GraphError> {
	if spec.trim().is_empty() {
		return Err(GraphError::EmptyGraph);
	}

	let mut vertices: Vec<String> = digit_runs(spec).map(str::to_owned).collect();
	vertices.sort();
	vertices.dedup();
	if vertices.is_empty() {
		return Err(GraphError::InsufficientVertices(0));
	}

	let mut edges = Vec::new();
	for token in spec.split(',') {
		match parse_edge(token) {
			Ok(edge) => edges.push(edge),
			Err(err) => warn!("skipping edge: {err}"),
		}
	}

	Ok(ParsedGraph { vertices, edges })
}

fn digit_runs(s: &str) -> impl Iterator<Item = &str> {
	s.split(|c: char| !c.is_ascii_digit())
		.filter(|run| !run.is_empty())
}

fn parse_edge(token: &str) -> Result<Edge, GraphError> {
	let mut runs = digit_runs(token);
	match (runs.next(), runs.next()) {
		(Some(source), Some(target)) => Ok(Edge {
			source: source.to_owned(),
			target: target.to_owned(),
		}),
		_ => Err(GraphError::MalformedEdge(token.to_owned())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edge(source: &str, target: &str) -> Edge {
		Edge {
			source: source.to_owned(),
			target: target.to_owned(),
		}
	}

	#[test]
	fn vertices_are_deduplicated_and_sorted() {
		let graph = parse("3=1,1=2").unwrap();
		assert_eq!(graph.vertices, vec!["1", "2", "3"]);
		assert_eq!(graph.edges, vec![edge("3", "1"), edge("1", "2")]);
	}

	#[test]
	fn vertex_sort_is_lexicographic_not_numeric() {
		// "10" orders before "2" under string comparison; this pins the
		// current contract so a switch to numeric order is deliberate.
		let graph = parse("10=2,2=3").unwrap();
		assert_eq!(graph.vertices, vec!["10", "2", "3"]);
	}

	#[test]
	fn duplicate_edges_keep_input_order() {
		let graph = parse("1=2,1=2,2=1").unwrap();
		assert_eq!(
			graph.edges,
			vec![edge("1", "2"), edge("1", "2"), edge("2", "1")]
		);
		assert_eq!(graph.vertices, vec!["1", "2"]);
	}

	#[test]
	fn separator_is_any_non_digit_run() {
		let graph = parse("1-2,3:4,5 = 6").unwrap();
		assert_eq!(
			graph.edges,
			vec![edge("1", "2"), edge("3", "4"), edge("5", "6")]
		);
	}

	#[test]
	fn extra_runs_in_a_token_are_ignored_past_the_first_two() {
		let graph = parse("1=2=3").unwrap();
		assert_eq!(graph.edges, vec![edge("1", "2")]);
		assert_eq!(graph.vertices, vec!["1", "2", "3"]);
	}

	#[test]
	fn degenerate_token_is_dropped_but_its_digits_remain_vertices() {
		let graph = parse("1=2,7").unwrap();
		assert_eq!(graph.edges, vec![edge("1", "2")]);
		assert_eq!(graph.vertices, vec!["1", "2", "7"]);
	}

	#[test]
	fn empty_spec_is_rejected() {
		assert_eq!(parse(""), Err(GraphError::EmptyGraph));
		assert_eq!(parse("   "), Err(GraphError::EmptyGraph));
	}

	#[test]
	fn spec_without_digits_has_no_vertices() {
		assert_eq!(parse("a=b"), Err(GraphError::InsufficientVertices(0)));
	}
}
