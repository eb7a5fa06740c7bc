//! Tab separated prediction table parsing and loading.

use std::collections::BTreeSet;

use log::info;

use super::row::PredictionRow;
use crate::error::{DashboardError, Result};

const REQUIRED_COLUMNS: [&str; 5] = ["Drug", "Drug_Name", "Disease", "Disease_Name", "Confidence"];

/// Cell spellings that pandas and friends write for a missing id.
const NULL_CELLS: [&str; 6] = ["", "nan", "none", "null", "na", "n/a"];

/// The loaded prediction table, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionTable {
	rows: Vec<PredictionRow>,
}

impl PredictionTable {
	pub fn new(rows: Vec<PredictionRow>) -> Self {
		Self { rows }
	}

	pub fn rows(&self) -> &[PredictionRow] {
		&self.rows
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Distinct drug ids, sorted.
	pub fn drugs(&self) -> Vec<String> {
		self.rows
			.iter()
			.map(|row| row.drug.clone())
			.collect::<BTreeSet<_>>()
			.into_iter()
			.collect()
	}

	/// Rows whose drug id is in `selected`, keeping file order.
	pub fn select(&self, selected: &[String]) -> Vec<PredictionRow> {
		self.rows
			.iter()
			.filter(|row| selected.iter().any(|drug| *drug == row.drug))
			.cloned()
			.collect()
	}
}

struct Columns {
	drug: usize,
	drug_name: usize,
	disease: usize,
	disease_name: usize,
	confidence: usize,
	pubmed_id: Option<usize>,
	title: Option<usize>,
}

impl Columns {
	fn from_header(header: &str) -> Result<Self> {
		let names: Vec<&str> = header.split('\t').map(str::trim).collect();
		let find = |name: &str| names.iter().position(|n| *n == name);
		let require = |name: &str| find(name).ok_or_else(|| DashboardError::MissingColumn(name.into()));

		Ok(Self {
			drug: require(REQUIRED_COLUMNS[0])?,
			drug_name: require(REQUIRED_COLUMNS[1])?,
			disease: require(REQUIRED_COLUMNS[2])?,
			disease_name: require(REQUIRED_COLUMNS[3])?,
			confidence: require(REQUIRED_COLUMNS[4])?,
			pubmed_id: find("PubMed_ID"),
			title: find("Title"),
		})
	}

	fn max_required(&self) -> usize {
		[
			self.drug,
			self.drug_name,
			self.disease,
			self.disease_name,
			self.confidence,
		]
		.into_iter()
		.max()
		.unwrap_or(0)
	}
}

/// Parses the prediction TSV. The first non-blank line is the header.
pub fn parse_predictions(text: &str) -> Result<PredictionTable> {
	let mut lines = text
		.lines()
		.enumerate()
		.filter(|(_, line)| !line.trim().is_empty());

	let Some((_, header)) = lines.next() else {
		return Err(DashboardError::MissingColumn(REQUIRED_COLUMNS[0].into()));
	};
	let columns = Columns::from_header(header)?;

	let mut rows = Vec::new();
	for (idx, line) in lines {
		let line_no = idx + 1;
		let cells: Vec<&str> = line.split('\t').map(str::trim).collect();
		if cells.len() <= columns.max_required() {
			return Err(DashboardError::Parse {
				line: line_no,
				message: format!(
					"expected at least {} cells, found {}",
					columns.max_required() + 1,
					cells.len()
				),
			});
		}

		let confidence_cell = cells[columns.confidence];
		let confidence = confidence_cell
			.parse::<f64>()
			.ok()
			.filter(|value| value.is_finite())
			.ok_or_else(|| DashboardError::Parse {
				line: line_no,
				message: format!("confidence {confidence_cell:?} is not a finite number"),
			})?;

		let pubmed_id = match columns.pubmed_id.and_then(|i| cells.get(i)) {
			Some(cell) => parse_pubmed_id(cell).map_err(|message| DashboardError::Parse {
				line: line_no,
				message,
			})?,
			None => None,
		};
		let title = columns
			.title
			.and_then(|i| cells.get(i))
			.copied()
			.unwrap_or_default();

		rows.push(
			PredictionRow::new(
				cells[columns.drug],
				cells[columns.drug_name],
				cells[columns.disease],
				cells[columns.disease_name],
				confidence,
				pubmed_id,
			)
			.with_title(title),
		);
	}

	info!("Parsed {} prediction rows", rows.len());
	Ok(PredictionTable::new(rows))
}

/// Reads a nullable PubMed id cell. Float spellings such as `12345.0` are
/// accepted; zero and negative ids count as absent.
fn parse_pubmed_id(cell: &str) -> std::result::Result<Option<u64>, String> {
	if NULL_CELLS.contains(&cell.to_ascii_lowercase().as_str()) {
		return Ok(None);
	}
	let value: f64 = cell
		.parse()
		.map_err(|_| format!("PubMed id {cell:?} is not a number"))?;
	if !value.is_finite() || value < 1.0 {
		return Ok(None);
	}
	Ok(Some(value as u64))
}

/// Fetches and parses the table from `url`.
pub async fn fetch_predictions(url: &str) -> Result<PredictionTable> {
	info!("Loading predictions from {url}");
	let text = crate::http::get_text(url, None).await?;
	parse_predictions(&text)
}
