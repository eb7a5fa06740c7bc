use indexmap::{IndexMap, IndexSet};

use crate::predictions::PredictionRow;
use crate::raster::CanvasSize;

/// Qualitative palette safe for color-blind readers.
pub const PALETTE: &[&str] = &[
	"#88ccee", "#cc6677", "#ddcc77", "#117733", "#332288", "#aa4499", "#44aa99", "#999933",
	"#882255", "#661100", "#888888",
];

pub const CHART_TITLE: &str = "Prediction Confidence by Target";

const MARGIN_LEFT: f64 = 56.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 96.0;
const LEGEND_WIDTH: f64 = 170.0;
/// Share of each category slot covered by its bars.
const GROUP_FILL: f64 = 0.8;
const Y_TICKS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
	pub rect: Rect,
	pub color: &'static str,
	pub confidence: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
	pub x: f64,
	pub y: f64,
	pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	pub label: String,
	pub color: &'static str,
}

/// Grouped bar chart of confidence per disease, one color per drug.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartScene {
	pub size: CanvasSize,
	pub plot: Rect,
	pub bars: Vec<Bar>,
	pub categories: Vec<AxisLabel>,
	pub y_ticks: Vec<AxisLabel>,
	pub legend: Vec<LegendEntry>,
}

impl ChartScene {
	/// Returns `None` for empty input. A repeated disease/drug slot keeps the
	/// last row's confidence.
	pub fn build(rows: &[PredictionRow], size: CanvasSize) -> Option<Self> {
		if rows.is_empty() {
			return None;
		}

		let mut diseases = IndexSet::new();
		let mut drugs = IndexSet::new();
		let mut slots = IndexMap::new();
		for row in rows {
			let (disease, _) = diseases.insert_full(row.disease_name.as_str());
			let (drug, _) = drugs.insert_full(row.drug_name.as_str());
			slots.insert((disease, drug), row.confidence);
		}

		let plot = Rect {
			x: MARGIN_LEFT,
			y: MARGIN_TOP,
			width: (size.width_f64() - MARGIN_LEFT - LEGEND_WIDTH).max(1.0),
			height: (size.height_f64() - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
		};
		let slot_width = plot.width / diseases.len() as f64;
		let bar_width = slot_width * GROUP_FILL / drugs.len() as f64;
		let baseline = plot.y + plot.height;

		let bars = slots
			.iter()
			.map(|(&(disease, drug), &confidence)| {
				let height = confidence.clamp(0.0, 1.0) * plot.height;
				let x = plot.x
					+ disease as f64 * slot_width
					+ slot_width * (1.0 - GROUP_FILL) / 2.0
					+ drug as f64 * bar_width;
				Bar {
					rect: Rect {
						x,
						y: baseline - height,
						width: bar_width,
						height,
					},
					color: PALETTE[drug % PALETTE.len()],
					confidence,
				}
			})
			.collect();

		let categories = diseases
			.iter()
			.enumerate()
			.map(|(i, name)| AxisLabel {
				x: plot.x + (i as f64 + 0.5) * slot_width,
				y: baseline + 8.0,
				text: name.to_string(),
			})
			.collect();

		let y_ticks = (0..=Y_TICKS)
			.map(|i| {
				let value = i as f64 / Y_TICKS as f64;
				AxisLabel {
					x: plot.x - 6.0,
					y: baseline - value * plot.height,
					text: format!("{value:.1}"),
				}
			})
			.collect();

		let legend = drugs
			.iter()
			.enumerate()
			.map(|(i, name)| LegendEntry {
				label: name.to_string(),
				color: PALETTE[i % PALETTE.len()],
			})
			.collect();

		Some(Self {
			size,
			plot,
			bars,
			categories,
			y_ticks,
			legend,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rows() -> Vec<PredictionRow> {
		vec![
			PredictionRow::new("D1", "Aspirin", "X1", "Fever", 0.8, None),
			PredictionRow::new("D2", "Metformin", "X1", "Fever", 0.4, None),
			PredictionRow::new("D1", "Aspirin", "X2", "Gout", 0.6, None),
		]
	}

	#[test]
	fn empty_rows_have_no_chart() {
		assert!(ChartScene::build(&[], CanvasSize::new(900, 450)).is_none());
	}

	#[test]
	fn one_bar_per_slot() {
		let scene = ChartScene::build(&rows(), CanvasSize::new(900, 450)).unwrap();
		assert_eq!(scene.bars.len(), 3);
		assert_eq!(
			scene.categories.iter().map(|c| c.text.as_str()).collect::<Vec<_>>(),
			vec!["Fever", "Gout"]
		);
		assert_eq!(
			scene.legend.iter().map(|l| l.label.as_str()).collect::<Vec<_>>(),
			vec!["Aspirin", "Metformin"]
		);
		assert_eq!(scene.bars[0].color, scene.bars[2].color);
		assert_ne!(scene.bars[0].color, scene.bars[1].color);
	}

	#[test]
	fn bar_height_tracks_confidence() {
		let scene = ChartScene::build(&rows(), CanvasSize::new(900, 450)).unwrap();
		let baseline = scene.plot.y + scene.plot.height;
		let bar = &scene.bars[0];
		assert!((bar.rect.height - 0.8 * scene.plot.height).abs() < 1e-9);
		assert!((bar.rect.y + bar.rect.height - baseline).abs() < 1e-9);
	}

	#[test]
	fn repeated_slot_keeps_last_value() {
		let mut rows = rows();
		rows.push(PredictionRow::new("D1", "Aspirin", "X1", "Fever", 0.1, None));
		let scene = ChartScene::build(&rows, CanvasSize::new(900, 450)).unwrap();
		assert_eq!(scene.bars.len(), 3);
		assert_eq!(scene.bars[0].confidence, 0.1);
	}

	#[test]
	fn bars_stay_in_their_slot() {
		let scene = ChartScene::build(&rows(), CanvasSize::new(900, 450)).unwrap();
		let slot = scene.plot.width / 2.0;
		for bar in &scene.bars {
			let start = ((bar.rect.x - scene.plot.x) / slot).floor();
			let end = ((bar.rect.x + bar.rect.width - scene.plot.x) / slot).floor();
			assert_eq!(start, end);
		}
	}
}
