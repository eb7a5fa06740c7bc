mod abstracts;
mod contact_form;
mod drug_filter;
mod export_button;
mod figure;
mod intro;
mod prediction_table;

pub use abstracts::AbstractList;
pub use contact_form::{ContactForm, ContactOutcome, validate_contact};
pub use drug_filter::DrugFilter;
pub use export_button::ExportButton;
pub use figure::{ConfidenceChart, NetworkView};
pub use intro::{AboutPanel, Footer, Header, InterpretationSidebar};
pub use prediction_table::PredictionTable;
