//! PubMed abstract lookup via E-utilities `efetch`.

use log::{info, warn};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::config::PubMedConfig;
use crate::error::{DashboardError, Result};

const ABSTRACT_TAG: &[u8] = b"AbstractText";

pub const FETCH_FAILED_MESSAGE: &str = "Could not fetch abstract.";
pub const ABSTRACT_MISSING_MESSAGE: &str = "Abstract not found in response.";

/// efetch URL returning the article as XML.
pub fn efetch_url(base_url: &str, pmid: u64) -> String {
	format!(
		"{}/efetch.fcgi?db=pubmed&id={pmid}&retmode=xml",
		base_url.trim_end_matches('/')
	)
}

/// Text of the first `AbstractText` element, inline markup flattened.
pub fn extract_abstract(xml: &str) -> Option<String> {
	let mut reader = Reader::from_str(xml);
	// Nesting depth inside the first AbstractText; zero until it opens.
	let mut depth = 0usize;
	let mut text = String::new();

	loop {
		match reader.read_event() {
			Ok(Event::Start(e)) => {
				if depth > 0 {
					depth += 1;
				} else if e.local_name().as_ref() == ABSTRACT_TAG {
					depth = 1;
				}
			}
			Ok(Event::End(_)) if depth > 0 => {
				depth -= 1;
				if depth == 0 {
					break;
				}
			}
			Ok(Event::Empty(e)) if depth == 0 && e.local_name().as_ref() == ABSTRACT_TAG => break,
			Ok(Event::Text(t)) if depth > 0 => match t.unescape() {
				Ok(chunk) => text.push_str(&chunk),
				Err(_) => text.push_str(&String::from_utf8_lossy(&t)),
			},
			Ok(Event::CData(c)) if depth > 0 => text.push_str(&String::from_utf8_lossy(&c)),
			Ok(Event::Eof) => break,
			Err(err) => {
				warn!("Malformed efetch XML: {err}");
				break;
			}
			_ => {}
		}
	}

	let text = text.trim();
	(!text.is_empty()).then(|| text.to_string())
}

/// Fetches the abstract for `pmid`, retrying transport failures and error
/// statuses up to `config.retries` times. `Ok(None)` means the article has
/// no abstract.
pub async fn fetch_abstract(config: &PubMedConfig, pmid: u64) -> Result<Option<String>> {
	let url = efetch_url(&config.base_url, pmid);
	let mut last_err = DashboardError::Fetch(FETCH_FAILED_MESSAGE.into());

	for attempt in 0..=config.retries {
		match crate::http::get_text(&url, Some(config.timeout_ms)).await {
			Ok(xml) => {
				info!("Fetched PubMed {pmid} on attempt {}", attempt + 1);
				return Ok(extract_abstract(&xml));
			}
			Err(err) => {
				warn!("PubMed {pmid} attempt {} failed: {err}", attempt + 1);
				last_err = err;
			}
		}
	}
	Err(last_err)
}
