//! Dashboard configuration.
//!
//! Defaults cover every field; `index.html` may override any subset through an
//! inline `<script id="netcure-config" type="application/json">` block.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::network::LayoutParams;
use crate::raster::CanvasSize;

/// Element id of the inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "netcure-config";

/// PubMed E-utilities access policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PubMedConfig {
	/// E-utilities base URL, without trailing slash.
	pub base_url: String,
	/// Abort a request after this many milliseconds.
	pub timeout_ms: u32,
	/// Extra attempts after a failed request.
	pub retries: u32,
}

impl Default for PubMedConfig {
	fn default() -> Self {
		Self {
			base_url: "https://eutils.ncbi.nlm.nih.gov/entrez/eutils".into(),
			timeout_ms: 10_000,
			retries: 1,
		}
	}
}

/// Top-level dashboard settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
	/// Where the prediction TSV is served from.
	pub data_url: String,
	/// Header logo image.
	pub logo_url: String,
	/// Network canvas shown on the page.
	pub screen_network: CanvasSize,
	/// Network canvas embedded in the PDF report.
	pub export_network: CanvasSize,
	/// Confidence chart canvas, shared by page and report.
	pub chart: CanvasSize,
	/// Force simulation tuning.
	pub layout: LayoutParams,
	/// Pins every network layout to this seed when set.
	pub layout_seed: Option<u64>,
	pub pubmed: PubMedConfig,
	/// File name offered for the PDF download.
	pub report_file_name: String,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			data_url: "data/validated_predictions.tsv".into(),
			logo_url: "assets/netcure_logo.svg".into(),
			screen_network: CanvasSize::new(1000, 800),
			export_network: CanvasSize::new(800, 600),
			chart: CanvasSize::new(900, 450),
			layout: LayoutParams::default(),
			layout_seed: None,
			pubmed: PubMedConfig::default(),
			report_file_name: "NetCure_Full_Report.pdf".into(),
		}
	}
}

impl DashboardConfig {
	/// Parses a JSON override; absent fields keep their defaults.
	pub fn from_json(json: &str) -> Result<Self> {
		serde_json::from_str(json).map_err(|e| DashboardError::Config(e.to_string()))
	}

	/// Reads the inline configuration block from the page, falling back to
	/// defaults when it is missing or malformed.
	pub fn from_document() -> Self {
		let json = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
			.and_then(|el| el.text_content())
			.filter(|text| !text.trim().is_empty());

		match json.as_deref().map(Self::from_json) {
			Some(Ok(config)) => {
				info!("Loaded dashboard configuration from page");
				config
			}
			Some(Err(err)) => {
				warn!("Ignoring inline configuration: {err}");
				Self::default()
			}
			None => Self::default(),
		}
	}
}
