//! PDF export of the current selection.

mod download;
mod report;
mod text;

pub use download::download_bytes;
pub use report::{
	CHART_HEADING, NETWORK_HEADING, REPORT_TITLE, SUMMARY, TABLE_HEADERS, build_report, table_row,
};
pub use text::{to_latin1, truncate, wrap};

use log::info;

use crate::chart::render_confidence_chart;
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::network::{LayoutOptions, render_network};
use crate::predictions::PredictionRow;

const PDF_MIME: &str = "application/pdf";

/// Renders the chart and network at report size, assembles the PDF and
/// starts the download.
pub fn export_report(rows: &[PredictionRow], config: &DashboardConfig, layout: &LayoutOptions) -> Result<()> {
	let chart = render_confidence_chart(rows, config.chart)?;
	let network = render_network(rows, config.export_network, layout)?;
	let pdf = build_report(rows, chart.as_ref(), network.as_ref())?;
	download_bytes(&pdf, &config.report_file_name, PDF_MIME)?;
	info!("Exported {} rows to {}", rows.len(), config.report_file_name);
	Ok(())
}
