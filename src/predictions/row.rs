use std::fmt;

/// PubMed article page prefix used for evidence links.
pub const PUBMED_ARTICLE_BASE: &str = "https://pubmed.ncbi.nlm.nih.gov";

/// Whether a prediction is backed by a PubMed article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Validation {
	/// Literature supported: the row carries a positive PubMed id.
	Validated,
	/// Novel prediction without a PubMed id.
	NotValidated,
}

impl Validation {
	/// Resolves the raw nullable identifier field.
	pub fn from_pubmed_id(pubmed_id: Option<u64>) -> Self {
		match pubmed_id {
			Some(id) if id > 0 => Self::Validated,
			_ => Self::NotValidated,
		}
	}

	/// Label shown in tables and reports.
	pub fn label(self) -> &'static str {
		match self {
			Self::Validated => "Validated",
			Self::NotValidated => "Not Validated",
		}
	}

	pub fn is_validated(self) -> bool {
		self == Self::Validated
	}
}

impl fmt::Display for Validation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// One predicted drug-disease association.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionRow {
	pub drug: String,
	pub drug_name: String,
	pub disease: String,
	pub disease_name: String,
	pub confidence: f64,
	pub validation: Validation,
	pub pubmed_id: Option<u64>,
	pub title: String,
}

impl PredictionRow {
	/// Builds a row, deriving [`Validation`] from the PubMed id.
	pub fn new(
		drug: impl Into<String>,
		drug_name: impl Into<String>,
		disease: impl Into<String>,
		disease_name: impl Into<String>,
		confidence: f64,
		pubmed_id: Option<u64>,
	) -> Self {
		let pubmed_id = pubmed_id.filter(|&id| id > 0);
		Self {
			drug: drug.into(),
			drug_name: drug_name.into(),
			disease: disease.into(),
			disease_name: disease_name.into(),
			confidence,
			validation: Validation::from_pubmed_id(pubmed_id),
			pubmed_id,
			title: String::new(),
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Overrides the validation status without touching the PubMed id.
	pub fn with_validation(mut self, validation: Validation) -> Self {
		self.validation = validation;
		self
	}

	/// Identity of the drug node: `"{Drug_Name} ({Drug})"`.
	pub fn drug_label(&self) -> String {
		format!("{} ({})", self.drug_name, self.drug)
	}

	/// Identity of the disease/target node: `"{Disease_Name} ({Disease})"`.
	pub fn target_label(&self) -> String {
		format!("{} ({})", self.disease_name, self.disease)
	}

	/// Article URL for validated rows.
	pub fn pubmed_link(&self) -> Option<String> {
		match (self.validation, self.pubmed_id) {
			(Validation::Validated, Some(id)) => Some(format!("{PUBMED_ARTICLE_BASE}/{id}/")),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validation_follows_pubmed_id() {
		assert_eq!(Validation::from_pubmed_id(Some(123)), Validation::Validated);
		assert_eq!(Validation::from_pubmed_id(Some(0)), Validation::NotValidated);
		assert_eq!(Validation::from_pubmed_id(None), Validation::NotValidated);
	}

	#[test]
	fn labels_and_links() {
		let row = PredictionRow::new("DB00945", "Aspirin", "D005334", "Fever", 0.8, Some(31415));
		assert_eq!(row.drug_label(), "Aspirin (DB00945)");
		assert_eq!(row.target_label(), "Fever (D005334)");
		assert_eq!(
			row.pubmed_link().as_deref(),
			Some("https://pubmed.ncbi.nlm.nih.gov/31415/")
		);

		let novel = PredictionRow::new("DB00945", "Aspirin", "D1", "Gout", 0.4, None);
		assert_eq!(novel.pubmed_link(), None);
		assert_eq!(novel.validation.to_string(), "Not Validated");
	}
}
