use std::f64::consts::FRAC_PI_4;

use log::debug;
use web_sys::CanvasRenderingContext2d;

use super::bars::{CHART_TITLE, ChartScene};
use crate::error::Result;
use crate::predictions::PredictionRow;
use crate::raster::{Canvas, CanvasSize, RasterImage};

const AXIS_COLOR: &str = "#444444";
const GRID_COLOR: &str = "#e5e5e5";
const TEXT_COLOR: &str = "#222222";

/// Renders the grouped confidence chart, or `Ok(None)` for empty input.
pub fn render_confidence_chart(rows: &[PredictionRow], size: CanvasSize) -> Result<Option<RasterImage>> {
	let Some(scene) = ChartScene::build(rows, size) else {
		return Ok(None);
	};
	debug!("Confidence chart: {} bars at {}x{}", scene.bars.len(), size.width, size.height);
	let canvas = Canvas::new(size)?;
	paint(&scene, canvas.context());
	canvas.into_image().map(Some)
}

pub fn paint(scene: &ChartScene, ctx: &CanvasRenderingContext2d) {
	draw_grid(scene, ctx);
	draw_bars(scene, ctx);
	draw_axes(scene, ctx);
	draw_legend(scene, ctx);

	ctx.set_fill_style_str(TEXT_COLOR);
	ctx.set_font("bold 16px sans-serif");
	ctx.set_text_align("left");
	ctx.set_text_baseline("top");
	let _ = ctx.fill_text(CHART_TITLE, scene.plot.x, 12.0);
}

fn draw_grid(scene: &ChartScene, ctx: &CanvasRenderingContext2d) {
	let plot = scene.plot;
	ctx.set_stroke_style_str(GRID_COLOR);
	ctx.set_line_width(1.0);
	ctx.set_fill_style_str(TEXT_COLOR);
	ctx.set_font("11px sans-serif");
	ctx.set_text_align("right");
	ctx.set_text_baseline("middle");
	for tick in &scene.y_ticks {
		ctx.begin_path();
		ctx.move_to(plot.x, tick.y);
		ctx.line_to(plot.x + plot.width, tick.y);
		ctx.stroke();
		let _ = ctx.fill_text(&tick.text, tick.x, tick.y);
	}
}

fn draw_bars(scene: &ChartScene, ctx: &CanvasRenderingContext2d) {
	for bar in &scene.bars {
		ctx.set_fill_style_str(bar.color);
		ctx.fill_rect(bar.rect.x, bar.rect.y, bar.rect.width, bar.rect.height);
	}
}

fn draw_axes(scene: &ChartScene, ctx: &CanvasRenderingContext2d) {
	let plot = scene.plot;
	let baseline = plot.y + plot.height;
	ctx.set_stroke_style_str(AXIS_COLOR);
	ctx.set_line_width(1.0);
	ctx.begin_path();
	ctx.move_to(plot.x, plot.y);
	ctx.line_to(plot.x, baseline);
	ctx.line_to(plot.x + plot.width, baseline);
	ctx.stroke();

	// Disease names run diagonally under their slot.
	ctx.set_fill_style_str(TEXT_COLOR);
	ctx.set_font("11px sans-serif");
	ctx.set_text_align("right");
	ctx.set_text_baseline("top");
	for label in &scene.categories {
		ctx.save();
		let _ = ctx.translate(label.x, label.y);
		let _ = ctx.rotate(-FRAC_PI_4);
		let _ = ctx.fill_text(&label.text, 0.0, 0.0);
		ctx.restore();
	}

	ctx.save();
	let _ = ctx.translate(14.0, plot.y + plot.height / 2.0);
	let _ = ctx.rotate(-2.0 * FRAC_PI_4);
	ctx.set_text_align("center");
	let _ = ctx.fill_text("Confidence", 0.0, 0.0);
	ctx.restore();
}

fn draw_legend(scene: &ChartScene, ctx: &CanvasRenderingContext2d) {
	let x = scene.plot.x + scene.plot.width + 16.0;
	let mut y = scene.plot.y;
	ctx.set_font("12px sans-serif");
	ctx.set_text_align("left");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str(TEXT_COLOR);
	let _ = ctx.fill_text("Drug_Name", x, y);
	for entry in &scene.legend {
		y += 20.0;
		ctx.set_fill_style_str(entry.color);
		ctx.fill_rect(x, y - 6.0, 12.0, 12.0);
		ctx.set_fill_style_str(TEXT_COLOR);
		let _ = ctx.fill_text(&entry.label, x + 18.0, y);
	}
}
