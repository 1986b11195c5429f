use std::collections::HashMap;
use std::f64::consts::PI;

use super::error::GraphError;
use super::types::{Edge, Point};

/// Places every vertex on a circle inscribed in a square canvas.
///
/// Vertices are assigned angles by sorted rank: the vertex at rank 0 sits
/// at the starting angle `π·(0.5 − 1/v)` and each subsequent rank advances
/// by `2π/v`. The starting offset rotates the first vertex slightly
/// counter-clockwise from straight up; it is part of the visual contract
/// and must not be normalized away.
///
/// Coordinates are rebuilt from scratch on every call; nothing is cached.
pub fn circular_layout(
	vertices: &[String],
	size: f64,
	border: f64,
) -> Result<HashMap<String, Point>, GraphError> {
	let v = vertices.len();
	if v < 1 {
		return Err(GraphError::InsufficientVertices(v));
	}

	let center = size / 2.0;
	let radius = size / 2.0 - border;
	let step = 2.0 * PI / v as f64;
	let mut angle = PI * (0.5 - 1.0 / v as f64);

	let mut coordinates = HashMap::with_capacity(v);
	for vertex in vertices {
		coordinates.insert(
			vertex.clone(),
			Point {
				x: center + radius * angle.cos(),
				y: center + radius * angle.sin(),
			},
		);
		angle += step;
	}

	Ok(coordinates)
}

/// Resolves an edge's endpoint coordinates from the layout map.
///
/// Fails with [`GraphError::UnknownVertex`] when either endpoint is
/// missing, naming the first missing identifier.
pub fn edge_endpoints(
	coordinates: &HashMap<String, Point>,
	edge: &Edge,
) -> Result<(Point, Point), GraphError> {
	match (coordinates.get(&edge.source), coordinates.get(&edge.target)) {
		(Some(&source), Some(&target)) => Ok((source, target)),
		(None, _) => Err(GraphError::UnknownVertex(edge.source.clone())),
		(_, None) => Err(GraphError::UnknownVertex(edge.target.clone())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ids(ids: &[&str]) -> Vec<String> {
		ids.iter().map(|id| (*id).to_owned()).collect()
	}

	fn assert_close(actual: f64, expected: f64) {
		assert!(
			(actual - expected).abs() < 1e-9,
			"expected {expected}, got {actual}"
		);
	}

	#[test]
	fn triangle_matches_reference_geometry() {
		let coords = circular_layout(&ids(&["1", "2", "3"]), 500.0, 0.0).unwrap();
		assert_eq!(coords.len(), 3);

		// Start angle π·(0.5 − 1/3) = π/6, step 2π/3, radius 250,
		// center (250, 250).
		let start = PI * (0.5 - 1.0 / 3.0);
		let step = 2.0 * PI / 3.0;
		for (rank, id) in ["1", "2", "3"].iter().enumerate() {
			let angle = start + rank as f64 * step;
			let point = coords[*id];
			assert_close(point.x, 250.0 + 250.0 * angle.cos());
			assert_close(point.y, 250.0 + 250.0 * angle.sin());
		}
	}

	#[test]
	fn every_vertex_sits_at_the_layout_radius() {
		for v in 1..=8 {
			let vertices: Vec<String> = (1..=v).map(|i| i.to_string()).collect();
			let coords = circular_layout(&vertices, 500.0, 10.0).unwrap();
			for point in coords.values() {
				let distance = ((point.x - 250.0).powi(2) + (point.y - 250.0).powi(2)).sqrt();
				assert_close(distance, 240.0);
			}
		}
	}

	#[test]
	fn single_vertex_sits_at_the_start_angle() {
		// v = 1: start angle π·(0.5 − 1) = −π/2, i.e. the top of the circle.
		let coords = circular_layout(&ids(&["7"]), 500.0, 0.0).unwrap();
		let point = coords["7"];
		assert_close(point.x, 250.0);
		assert_close(point.y, 0.0);
	}

	#[test]
	fn layout_is_idempotent() {
		let vertices = ids(&["1", "2", "3", "4", "5"]);
		let first = circular_layout(&vertices, 500.0, 0.0).unwrap();
		let second = circular_layout(&vertices, 500.0, 0.0).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn angles_follow_sorted_rank_not_vertex_value() {
		// Ranks are positional: whichever identifier is first in the
		// slice takes the start angle.
		let swapped = circular_layout(&ids(&["2", "1"]), 500.0, 0.0).unwrap();
		let sorted = circular_layout(&ids(&["1", "2"]), 500.0, 0.0).unwrap();
		assert_eq!(swapped["2"], sorted["1"]);
		assert_eq!(swapped["1"], sorted["2"]);
	}

	#[test]
	fn zero_vertices_is_an_error() {
		assert_eq!(
			circular_layout(&[], 500.0, 0.0),
			Err(GraphError::InsufficientVertices(0))
		);
	}

	#[test]
	fn missing_endpoint_names_the_unknown_vertex() {
		let coords = circular_layout(&ids(&["1", "2"]), 500.0, 0.0).unwrap();

		let known = Edge {
			source: "1".to_owned(),
			target: "2".to_owned(),
		};
		assert!(edge_endpoints(&coords, &known).is_ok());

		let unknown = Edge {
			source: "2".to_owned(),
			target: "9".to_owned(),
		};
		assert_eq!(
			edge_endpoints(&coords, &unknown),
			Err(GraphError::UnknownVertex("9".to_owned()))
		);
	}
}
