use std::collections::HashMap;
use std::f64::consts::PI;

use log::{debug, warn};
use web_sys::CanvasRenderingContext2d;

use super::layout::{circular_layout, edge_endpoints};
use super::parse;
use super::types::{EdgeStyler, GraphStyle, ParsedGraph, Point};

const BACKGROUND: &str = "#ffffff";
const VERTEX_FILL: &str = "#ffffff";
const INK: &str = "#000000";
const EDGE_WIDTH: f64 = 1.0;

/// Runs the whole parse, layout, and draw pipeline for one frame.
///
/// The background always paints. An empty spec, or one with no vertices,
/// leaves a background-only frame; both are idle states, not failures.
pub fn render_frame(
	spec: Option<&str>,
	style: &GraphStyle,
	edge_style: Option<&EdgeStyler>,
	ctx: &CanvasRenderingContext2d,
) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, style.canvas_size, style.canvas_size);

	let Some(spec) = spec else {
		return;
	};
	let graph = match parse::parse(spec) {
		Ok(graph) => graph,
		Err(err) => {
			debug!("skipping frame: {err}");
			return;
		}
	};
	let coordinates = match circular_layout(&graph.vertices, style.canvas_size, style.border) {
		Ok(coordinates) => coordinates,
		Err(err) => {
			debug!("skipping frame: {err}");
			return;
		}
	};

	render(&graph, &coordinates, style, edge_style, ctx);
}

/// Paints an already parsed and laid-out graph.
///
/// Vertices paint first, then edges in input order, so edge lines cross
/// vertex interiors and later edges draw over earlier ones.
pub fn render(
	graph: &ParsedGraph,
	coordinates: &HashMap<String, Point>,
	style: &GraphStyle,
	edge_style: Option<&EdgeStyler>,
	ctx: &CanvasRenderingContext2d,
) {
	draw_vertices(graph, coordinates, style, ctx);
	draw_edges(graph, coordinates, edge_style, ctx);
}

fn draw_vertices(
	graph: &ParsedGraph,
	coordinates: &HashMap<String, Point>,
	style: &GraphStyle,
	ctx: &CanvasRenderingContext2d,
) {
	ctx.set_stroke_style_str(INK);
	ctx.set_line_width(1.0);

	for vertex in &graph.vertices {
		// The layout map is built from this same vertex list.
		let Some(point) = coordinates.get(vertex) else {
			continue;
		};

		ctx.begin_path();
		let _ = ctx.arc(point.x, point.y, style.vertex_radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(VERTEX_FILL);
		ctx.fill();
		ctx.stroke();

		if style.show_labels {
			ctx.set_fill_style_str(INK);
			ctx.set_font("10px sans-serif");
			let _ = ctx.fill_text(vertex, point.x + style.vertex_radius + 3.0, point.y + 3.0);
		}
	}
}

fn draw_edges(
	graph: &ParsedGraph,
	coordinates: &HashMap<String, Point>,
	edge_style: Option<&EdgeStyler>,
	ctx: &CanvasRenderingContext2d,
) {
	ctx.set_line_width(EDGE_WIDTH);

	for edge in &graph.edges {
		let (from, to) = match edge_endpoints(coordinates, edge) {
			Ok(points) => points,
			Err(err) => {
				warn!("skipping edge {}={}: {err}", edge.source, edge.target);
				continue;
			}
		};

		let color = edge_style
			.map(|styler| styler(&edge.source, &edge.target))
			.unwrap_or_else(|| INK.to_owned());
		ctx.set_stroke_style_str(&color);
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();
	}
}
