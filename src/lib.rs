//! NetCure.ai drug repositioning dashboard: Leptos client-side app wiring,
//! routes, and the prediction/network/report logic behind them.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

#[cfg(target_arch = "wasm32")]
use getrandom as _;

// Modules
pub mod chart;
mod components;
pub mod config;
pub mod error;
pub mod export;
mod http;
pub mod network;
mod pages;
pub mod predictions;
pub mod pubmed;
pub mod raster;

pub use components::{ContactOutcome, validate_contact};
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
pub use network::render_network;
pub use predictions::PredictionCache;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the dashboard and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	// App-wide configuration and the prediction table cache.
	provide_context(DashboardConfig::from_document());
	provide_context(PredictionCache::new());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="NetCure.ai – Multi-Drug Predictions" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
