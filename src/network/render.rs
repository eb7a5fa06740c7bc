use std::f64::consts::PI;

use log::debug;
use web_sys::CanvasRenderingContext2d;

use super::graph::NetworkGraph;
use super::layout::{Layout, LayoutOptions};
use super::scene::NetworkScene;
use super::style::LABEL_COLOR;
use crate::error::Result;
use crate::predictions::PredictionRow;
use crate::raster::{Canvas, CanvasSize, RasterImage};

/// Builds the positioned, styled network for `rows`, or `None` when there is
/// nothing to draw.
pub fn build_network_scene(
	rows: &[PredictionRow],
	size: CanvasSize,
	options: &LayoutOptions,
) -> Option<NetworkScene> {
	if rows.is_empty() {
		return None;
	}
	let graph = NetworkGraph::from_rows(rows);
	let seed = options.resolve_seed();
	let layout = Layout::compute(&graph, &options.params, seed);
	debug!(
		"Network layout: {} nodes, {} edges, seed {seed}",
		graph.node_count(),
		graph.edge_count()
	);
	Some(NetworkScene::build(&graph, &layout, size))
}

/// Renders the drug-target network for `rows` to a PNG of `size`.
///
/// Both the on-page view and the PDF report go through here. Empty input
/// skips rendering and yields `Ok(None)`.
pub fn render_network(
	rows: &[PredictionRow],
	size: CanvasSize,
	options: &LayoutOptions,
) -> Result<Option<RasterImage>> {
	let Some(scene) = build_network_scene(rows, size, options) else {
		debug!("No rows selected, skipping network render");
		return Ok(None);
	};
	let canvas = Canvas::new(size)?;
	paint(&scene, canvas.context());
	canvas.into_image().map(Some)
}

/// Draws edges, then nodes, then labels.
pub fn paint(scene: &NetworkScene, ctx: &CanvasRenderingContext2d) {
	draw_edges(scene, ctx);
	draw_nodes(scene, ctx);
	draw_labels(scene, ctx);
}

fn draw_edges(scene: &NetworkScene, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_cap("round");
	for edge in &scene.edges {
		// Canvas ignores non-positive widths, so such edges vanish.
		ctx.set_stroke_style_str(edge.style.color);
		ctx.set_line_width(edge.style.width);
		ctx.begin_path();
		ctx.move_to(edge.from.0, edge.from.1);
		ctx.line_to(edge.to.0, edge.to.1);
		ctx.stroke();
	}
}

fn draw_nodes(scene: &NetworkScene, ctx: &CanvasRenderingContext2d) {
	for node in &scene.nodes {
		let (x, y) = node.center;
		ctx.begin_path();
		let _ = ctx.arc(x, y, node.style.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.style.fill);
		ctx.fill();
	}
}

fn draw_labels(scene: &NetworkScene, ctx: &CanvasRenderingContext2d) {
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str(LABEL_COLOR);
	for node in &scene.nodes {
		ctx.set_font(&format!("{}px sans-serif", node.style.font_px));
		let _ = ctx.fill_text(&node.label, node.center.0, node.center.1);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::layout::LayoutParams;

	#[test]
	fn empty_rows_skip_rendering() {
		let options = LayoutOptions::default();
		assert!(build_network_scene(&[], CanvasSize::new(800, 600), &options).is_none());
		// Returns before touching the browser canvas.
		assert_eq!(render_network(&[], CanvasSize::new(800, 600), &options), Ok(None));
	}

	#[test]
	fn seeded_scenes_match_across_sizes() {
		let rows = vec![
			PredictionRow::new("D1", "Aspirin", "X1", "Fever", 0.8, Some(3)),
			PredictionRow::new("D2", "Metformin", "X1", "Fever", 0.3, None),
		];
		let options = LayoutOptions::seeded(LayoutParams::default(), 11);
		let screen = build_network_scene(&rows, CanvasSize::new(1000, 800), &options).unwrap();
		let export = build_network_scene(&rows, CanvasSize::new(800, 600), &options).unwrap();

		assert_eq!(screen.edges.len(), export.edges.len());
		for (a, b) in screen.edges.iter().zip(&export.edges) {
			assert_eq!(a.style, b.style);
		}
		let labels = |s: &NetworkScene| s.nodes.iter().map(|n| n.label.clone()).collect::<Vec<_>>();
		assert_eq!(labels(&screen), labels(&export));
	}
}
