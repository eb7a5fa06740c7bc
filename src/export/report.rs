//! PDF report assembly.

use log::info;
use printpdf::image_crate::{self, DynamicImage, ImageFormat};
use printpdf::{
	BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
	PdfLayerReference,
};

use super::text::{to_latin1, truncate, wrap};
use crate::error::{DashboardError, Result};
use crate::predictions::PredictionRow;
use crate::raster::RasterImage;

pub const REPORT_TITLE: &str = "NetCure.ai - Ultimate Multi-Drug Prediction Report";
pub const CHART_HEADING: &str = "Combined Confidence Scores";
pub const NETWORK_HEADING: &str = "Advanced Drug-Target Network";
pub const SUMMARY: &str = "Summary: This report shows all validated and novel predictions in a clear table, \
	confidence scores with color-coded bar chart, and an advanced drug–target network. \
	Use PubMed IDs for evidence validation.";
pub const TABLE_HEADERS: [&str; 6] = [
	"Drug",
	"Drug_Name",
	"Disease",
	"Disease_Name",
	"Confidence",
	"Validated",
];

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const LINE_HEIGHT: f32 = 10.0;
const IMAGE_WIDTH: f32 = 170.0;
const IMAGE_DPI: f32 = 96.0;
const MM_PER_INCH: f32 = 25.4;
const MM_PER_PT: f32 = 0.3528;
/// Average glyph advance of Helvetica as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.5;

/// Page width split into six and a half equal columns.
fn column_width() -> f32 {
	PAGE_WIDTH / 6.5
}

fn chars_fitting(width_mm: f32, font_size: f32) -> usize {
	(width_mm / (font_size * GLYPH_WIDTH * MM_PER_PT)).floor().max(1.0) as usize
}

/// Cells of one table body row.
pub fn table_row(row: &PredictionRow) -> [String; 6] {
	[
		row.drug.clone(),
		row.drug_name.clone(),
		row.disease.clone(),
		row.disease_name.clone(),
		format!("{:.2}", row.confidence),
		row.validation.label().to_string(),
	]
}

struct Fonts {
	regular: IndirectFontRef,
	bold: IndirectFontRef,
}

/// Top-down text/image cursor over A4 pages.
struct ReportWriter {
	doc: PdfDocumentReference,
	layer: PdfLayerReference,
	fonts: Fonts,
	/// Distance of the cursor from the bottom edge, in mm.
	y: f32,
	pages: usize,
	/// Section headings in the order they were written.
	outline: Vec<&'static str>,
}

impl ReportWriter {
	fn new(title: &str) -> Result<Self> {
		let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
		let layer = doc.get_page(page).get_layer(layer);
		let fonts = Fonts {
			regular: doc
				.add_builtin_font(BuiltinFont::Helvetica)
				.map_err(|e| DashboardError::Report(e.to_string()))?,
			bold: doc
				.add_builtin_font(BuiltinFont::HelveticaBold)
				.map_err(|e| DashboardError::Report(e.to_string()))?,
		};
		Ok(Self {
			doc,
			layer,
			fonts,
			y: PAGE_HEIGHT - MARGIN,
			pages: 1,
			outline: Vec::new(),
		})
	}

	fn new_page(&mut self) {
		let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
		self.layer = self.doc.get_page(page).get_layer(layer);
		self.y = PAGE_HEIGHT - MARGIN;
		self.pages += 1;
	}

	fn ensure_space(&mut self, height: f32) {
		if self.y - height < MARGIN {
			self.new_page();
		}
	}

	fn gap(&mut self, height: f32) {
		self.y -= height;
	}

	fn text_at(&self, text: &str, size: f32, bold: bool, x: f32) {
		let font = if bold { &self.fonts.bold } else { &self.fonts.regular };
		// Baseline sits a little above the bottom of the line box.
		let baseline = self.y - LINE_HEIGHT * 0.7;
		self.layer
			.use_text(to_latin1(text), size, Mm(x), Mm(baseline), font);
	}

	fn line(&mut self, text: &str, size: f32, bold: bool) {
		self.ensure_space(LINE_HEIGHT);
		self.text_at(text, size, bold, MARGIN);
		self.y -= LINE_HEIGHT;
	}

	fn heading(&mut self, text: &'static str) {
		self.gap(5.0);
		self.line(text, 12.0, true);
		self.gap(3.0);
		self.outline.push(text);
	}

	fn cells(&mut self, cells: &[String], size: f32, bold: bool) {
		self.ensure_space(LINE_HEIGHT);
		let width = column_width();
		let max_chars = chars_fitting(width - 2.0, size);
		for (i, cell) in cells.iter().enumerate() {
			let x = MARGIN + i as f32 * width + 1.0;
			self.text_at(&truncate(cell, max_chars), size, bold, x);
		}
		self.y -= LINE_HEIGHT;
	}

	fn paragraph(&mut self, text: &str, size: f32) {
		let max_chars = chars_fitting(PAGE_WIDTH - 2.0 * MARGIN, size);
		for line in wrap(&to_latin1(text), max_chars) {
			self.line(&line, size, false);
		}
	}

	fn image(&mut self, raster: &RasterImage) -> Result<()> {
		let decoded = image_crate::load_from_memory_with_format(&raster.png, ImageFormat::Png)
			.map_err(|e| DashboardError::Image(e.to_string()))?;
		// Alpha is flattened; the canvas background is already opaque white.
		let rgb = decoded.to_rgb8();
		let (width_px, height_px) = rgb.dimensions();
		let decoded = DynamicImage::ImageRgb8(rgb);

		let natural_width = width_px as f32 / IMAGE_DPI * MM_PER_INCH;
		let natural_height = height_px as f32 / IMAGE_DPI * MM_PER_INCH;
		let max_height = PAGE_HEIGHT - 2.0 * MARGIN;
		let mut scale = IMAGE_WIDTH / natural_width;
		if natural_height * scale > max_height {
			scale = max_height / natural_height;
		}
		let height = natural_height * scale;

		self.ensure_space(height);
		Image::from_dynamic_image(&decoded).add_to_layer(
			self.layer.clone(),
			ImageTransform {
				translate_x: Some(Mm(MARGIN)),
				translate_y: Some(Mm(self.y - height)),
				scale_x: Some(scale),
				scale_y: Some(scale),
				dpi: Some(IMAGE_DPI),
				..Default::default()
			},
		);
		self.y -= height;
		Ok(())
	}

	fn finish(self) -> Result<(Vec<u8>, usize)> {
		let pages = self.pages;
		let bytes = self
			.doc
			.save_to_bytes()
			.map_err(|e| DashboardError::Report(e.to_string()))?;
		Ok((bytes, pages))
	}
}

fn write_report(
	rows: &[PredictionRow],
	chart: Option<&RasterImage>,
	network: Option<&RasterImage>,
) -> Result<ReportWriter> {
	let mut writer = ReportWriter::new(REPORT_TITLE)?;

	writer.line(REPORT_TITLE, 12.0, true);
	writer.gap(5.0);

	let headers = TABLE_HEADERS.map(String::from);
	writer.cells(&headers, 10.0, true);
	for row in rows {
		writer.cells(&table_row(row), 7.0, false);
	}

	writer.heading(CHART_HEADING);
	if let Some(chart) = chart {
		writer.image(chart)?;
	}

	if let Some(network) = network {
		writer.heading(NETWORK_HEADING);
		writer.image(network)?;
	}

	writer.gap(5.0);
	writer.paragraph(SUMMARY, 11.0);
	Ok(writer)
}

/// Builds the PDF report for the selected rows. Missing images (nothing to
/// render) leave their section out.
pub fn build_report(
	rows: &[PredictionRow],
	chart: Option<&RasterImage>,
	network: Option<&RasterImage>,
) -> Result<Vec<u8>> {
	let (bytes, pages) = write_report(rows, chart, network)?.finish()?;
	info!(
		"Built report: {} rows, {pages} pages, {} bytes",
		rows.len(),
		bytes.len()
	);
	Ok(bytes)
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use printpdf::image_crate::{Rgba, RgbaImage};

	use super::*;
	use crate::raster::CanvasSize;

	fn png(width: u32, height: u32) -> RasterImage {
		let pixels = RgbaImage::from_pixel(width, height, Rgba([31, 120, 180, 255]));
		let mut png = Vec::new();
		DynamicImage::ImageRgba8(pixels)
			.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
			.unwrap();
		RasterImage {
			size: CanvasSize::new(width, height),
			png,
		}
	}

	fn image_objects(pdf: &[u8]) -> usize {
		let compact: Vec<u8> = pdf.iter().copied().filter(|b| !b.is_ascii_whitespace()).collect();
		compact
			.windows(b"/Subtype/Image".len())
			.filter(|w| *w == b"/Subtype/Image")
			.count()
	}

	fn rows() -> Vec<PredictionRow> {
		vec![
			PredictionRow::new("DB00945", "Aspirin", "D005334", "Fever", 0.8, Some(123)),
			PredictionRow::new("DB00331", "Metformin", "D000375", "Aging", 0.456, None),
		]
	}

	#[test]
	fn table_cells() {
		let cells = table_row(&rows()[1]);
		assert_eq!(cells[4], "0.46");
		assert_eq!(cells[5], "Not Validated");
	}

	#[test]
	fn builds_a_pdf_without_images() {
		let bytes = build_report(&rows(), None, None).unwrap();
		assert!(bytes.starts_with(b"%PDF"));
	}

	#[test]
	fn long_tables_span_pages() {
		let many: Vec<_> = (0..80)
			.map(|i| PredictionRow::new(format!("D{i}"), "Drug", "X", "Disease", 0.5, None))
			.collect();
		let bytes = build_report(&many, None, None).unwrap();
		assert!(bytes.starts_with(b"%PDF"));
	}

	#[test]
	fn invalid_png_is_an_image_error() {
		let broken = RasterImage {
			size: CanvasSize::new(1, 1),
			png: vec![1, 2, 3],
		};
		assert!(matches!(
			build_report(&rows(), Some(&broken), None),
			Err(DashboardError::Image(_))
		));
	}

	#[test]
	fn embeds_chart_and_network_images() {
		let many: Vec<_> = (0..30)
			.map(|i| PredictionRow::new(format!("D{i}"), "Drug", "X", "Disease", 0.5, None))
			.collect();
		let chart = png(90, 45);
		let network = png(80, 60);

		let writer = write_report(&many, Some(&chart), Some(&network)).unwrap();
		assert_eq!(writer.outline, vec![CHART_HEADING, NETWORK_HEADING]);
		// The table fills a page and the network image needs a fresh one.
		assert!(writer.pages >= 3);

		let bytes = build_report(&many, Some(&chart), Some(&network)).unwrap();
		assert!(bytes.starts_with(b"%PDF"));
		assert_eq!(image_objects(&bytes), 2);
	}

	#[test]
	fn network_section_is_omitted_without_an_image() {
		let chart = png(90, 45);
		let writer = write_report(&rows(), Some(&chart), None).unwrap();
		assert_eq!(writer.outline, vec![CHART_HEADING]);

		let bytes = build_report(&rows(), Some(&chart), None).unwrap();
		assert_eq!(image_objects(&bytes), 1);
	}

	#[test]
	fn column_text_fits() {
		assert!(chars_fitting(column_width() - 2.0, 7.0) >= 20);
	}
}
