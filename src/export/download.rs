use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::{DashboardError, Result, js_error};

/// Offers `bytes` to the user as a file download.
pub fn download_bytes(bytes: &[u8], file_name: &str, mime: &str) -> Result<()> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| DashboardError::Js {
			context: "download",
			message: "no document".into(),
		})?;

	let parts = Array::of1(&Uint8Array::from(bytes));
	let props = BlobPropertyBag::new();
	props.set_type(mime);
	let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)
		.map_err(js_error("create blob"))?;
	let url = Url::create_object_url_with_blob(&blob).map_err(js_error("create object url"))?;

	let anchor: HtmlAnchorElement = document
		.create_element("a")
		.map_err(js_error("create anchor"))?
		.dyn_into()
		.map_err(js_error("create anchor"))?;
	anchor.set_href(&url);
	anchor.set_download(file_name);
	anchor.click();

	Url::revoke_object_url(&url).map_err(js_error("revoke object url"))
}
