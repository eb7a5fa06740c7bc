//! Dashboard error types

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while loading predictions, talking to PubMed, rendering or
/// exporting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
	/// A prediction row could not be parsed
	#[error("Parse error on line {line}: {message}")]
	Parse {
		/// 1-based line number in the source table
		line: usize,
		/// What was wrong with the line
		message: String,
	},

	/// The prediction table header lacks a required column
	#[error("Missing required column: {0}")]
	MissingColumn(String),

	/// A network request failed before a response arrived
	#[error("Fetch error: {0}")]
	Fetch(String),

	/// A response arrived with a non-success status
	#[error("HTTP status {0}")]
	HttpStatus(u16),

	/// A browser API call failed
	#[error("{context}: {message}")]
	Js {
		/// The operation that was attempted
		context: &'static str,
		/// The stringified JS exception
		message: String,
	},

	/// Raster image encoding or decoding failed
	#[error("Image error: {0}")]
	Image(String),

	/// PDF report assembly failed
	#[error("Report error: {0}")]
	Report(String),

	/// Configuration could not be read
	#[error("Configuration error: {0}")]
	Config(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Builds a mapper from a thrown [`JsValue`], or a JS object handed back by a
/// failed cast, to [`DashboardError::Js`].
pub fn js_error<V>(context: &'static str) -> impl Fn(V) -> DashboardError
where
	V: Into<JsValue>,
{
	move |value| {
		let value: JsValue = value.into();
		DashboardError::Js {
			context,
			message: value
				.as_string()
				.unwrap_or_else(|| format!("{value:?}")),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_error_names_the_line() {
		let err = DashboardError::Parse {
			line: 4,
			message: "bad confidence".into(),
		};
		assert_eq!(err.to_string(), "Parse error on line 4: bad confidence");
	}

	#[test]
	fn missing_column_message() {
		let err = DashboardError::MissingColumn("Drug".into());
		assert_eq!(err.to_string(), "Missing required column: Drug");
	}

	// JS calls are unavailable off wasm, so this only pins the signatures
	// `map_err` sees at `dyn_into` call sites.
	fn failed_cast(
		cast: std::result::Result<web_sys::HtmlCanvasElement, web_sys::Element>,
	) -> Result<web_sys::HtmlCanvasElement> {
		cast.map_err(js_error("create canvas"))
	}

	fn thrown(call: std::result::Result<(), JsValue>) -> Result<()> {
		call.map_err(js_error("build request"))
	}

	#[test]
	fn js_error_accepts_values_and_failed_casts() {
		let _cast: fn(_) -> _ = failed_cast;
		let _thrown: fn(_) -> _ = thrown;
	}
}
