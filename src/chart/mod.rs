//! Grouped confidence bar chart.

mod bars;
mod render;

pub use bars::{AxisLabel, Bar, CHART_TITLE, ChartScene, LegendEntry, PALETTE, Rect};
pub use render::{paint, render_confidence_chart};
