//! Minimal `fetch` wrapper for text resources.

use std::future::Future;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, Response, Window};

use crate::error::{DashboardError, Result, js_error};

/// Pending abort timer. Dropping it cancels the timer.
struct Deadline {
	window: Window,
	handle: i32,
	_abort: Closure<dyn FnMut()>,
}

impl Deadline {
	fn arm(window: &Window, controller: AbortController, ms: u32) -> Result<Self> {
		let abort: Closure<dyn FnMut()> = Closure::once(move || controller.abort());
		let handle = window
			.set_timeout_with_callback_and_timeout_and_arguments_0(
				abort.as_ref().unchecked_ref(),
				ms as i32,
			)
			.map_err(js_error("schedule request timeout"))?;
		Ok(Self {
			window: window.clone(),
			handle,
			_abort: abort,
		})
	}
}

impl Drop for Deadline {
	fn drop(&mut self) {
		self.window.clear_timeout_with_handle(self.handle);
	}
}

/// Runs `work` to completion and only then releases `guard`.
async fn holding<G, T>(guard: G, work: impl Future<Output = T>) -> T {
	let out = work.await;
	drop(guard);
	out
}

/// GETs `url` and returns the body as text. With `timeout_ms` set, the
/// request is aborted once the timeout elapses, including while the body is
/// still streaming.
pub async fn get_text(url: &str, timeout_ms: Option<u32>) -> Result<String> {
	let window = web_sys::window().ok_or_else(|| DashboardError::Fetch("no window".into()))?;

	let init = RequestInit::new();
	init.set_method("GET");

	let deadline = match timeout_ms {
		Some(ms) => {
			let controller = AbortController::new().map_err(js_error("create abort controller"))?;
			init.set_signal(Some(&controller.signal()));
			Some(Deadline::arm(&window, controller, ms)?)
		}
		None => None,
	};

	let request = Request::new_with_str_and_init(url, &init).map_err(js_error("build request"))?;
	holding(deadline, read_text(&window, &request)).await
}

async fn read_text(window: &Window, request: &Request) -> Result<String> {
	let response: Response = JsFuture::from(window.fetch_with_request(request))
		.await
		.map_err(|e| DashboardError::Fetch(e.as_string().unwrap_or_else(|| format!("{e:?}"))))?
		.dyn_into()
		.map_err(js_error("read response"))?;

	if !response.ok() {
		return Err(DashboardError::HttpStatus(response.status()));
	}

	let body = JsFuture::from(response.text().map_err(js_error("read body"))?)
		.await
		.map_err(|e| DashboardError::Fetch(e.as_string().unwrap_or_else(|| format!("{e:?}"))))?;
	body.as_string()
		.ok_or_else(|| DashboardError::Fetch("response body is not text".into()))
}
