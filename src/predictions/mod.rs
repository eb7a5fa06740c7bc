//! Prediction rows, the table they are loaded into, and its cache.

mod cache;
mod row;
mod source;

pub use cache::PredictionCache;
pub use row::{PUBMED_ARTICLE_BASE, PredictionRow, Validation};
pub use source::{PredictionTable, fetch_predictions, parse_predictions};
