use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::components::{
	AboutPanel, AbstractList, ConfidenceChart, ContactForm, DrugFilter, ExportButton, Footer, Header,
	InterpretationSidebar, NetworkView, PredictionTable,
};
use crate::config::DashboardConfig;
use crate::network::LayoutOptions;
use crate::predictions::{PredictionCache, PredictionTable, fetch_predictions};

/// Dashboard page: filter, table, abstracts, chart, network, export, contact.
#[component]
pub fn Home() -> impl IntoView {
	let config = expect_context::<DashboardConfig>();
	let cache = expect_context::<PredictionCache>();

	let table = RwSignal::new(None::<Arc<PredictionTable>>);
	let load_error = RwSignal::new(None::<String>);
	let reload = RwSignal::new(0u32);
	let selected = RwSignal::new(Vec::<String>::new());

	let load_cache = cache.clone();
	let data_url = config.data_url.clone();
	Effect::new(move |_| {
		reload.track();
		let cache = load_cache.clone();
		let url = data_url.clone();
		spawn_local(async move {
			let loaded = match cache.get() {
				Some(cached) => Ok(cached),
				None => fetch_predictions(&url).await.map(|fresh| cache.insert(fresh)),
			};
			match loaded {
				Ok(loaded) => {
					info!("Prediction table ready: {} rows", loaded.len());
					if selected.with_untracked(Vec::is_empty) {
						selected.set(loaded.drugs().into_iter().take(1).collect());
					}
					load_error.set(None);
					table.set(Some(loaded));
				}
				Err(err) => {
					error!("Could not load predictions: {err}");
					load_error.set(Some(err.to_string()));
				}
			}
		});
	});

	let on_reload = move |_| {
		cache.invalidate();
		table.set(None);
		reload.update(|n| *n += 1);
	};

	let drugs = Memo::new(move |_| {
		table.with(|t| t.as_ref().map(|t| t.drugs()).unwrap_or_default())
	});
	let rows = Memo::new(move |_| {
		table.with(|t| {
			t.as_ref()
				.map(|t| selected.with(|sel| t.select(sel)))
				.unwrap_or_default()
		})
	});

	// One seed per selection, shared by the page and the export, so both show
	// the same placement.
	let layout_params = config.layout.clone();
	let pinned_seed = config.layout_seed;
	let layout = Memo::new(move |_| {
		selected.track();
		LayoutOptions::seeded(layout_params.clone(), pinned_seed.unwrap_or_else(rand::random))
	});

	let screen_network = config.screen_network;
	let chart_size = config.chart;
	let logo_url = config.logo_url.clone();

	view! {
		<div class="dashboard">
			<InterpretationSidebar />
			<main class="content">
				<Header logo_url=logo_url />
				<AboutPanel />
				<hr />
				<p>"Start exploring repositioning predictions now!"</p>
				<button class="reload" on:click=on_reload>"Reload data"</button>
				{move || load_error.get().map(|msg| view! { <p class="error">{msg}</p> })}
				<DrugFilter drugs=drugs selected=selected />
				<Show
					when=move || !rows.with(Vec::is_empty)
					fallback=|| view! { <p class="info">"Select at least one drug to see predictions."</p> }
				>
					<p class="success">
						{move || {
							format!(
								"Showing {} predictions for {} drugs.",
								rows.with(Vec::len),
								selected.with(Vec::len),
							)
						}}
					</p>
					<PredictionTable rows=rows />
					<hr />
					<AbstractList rows=rows />
					<hr />
					<ConfidenceChart rows=rows size=chart_size />
					<hr />
					<NetworkView rows=rows layout=layout size=screen_network />
					<hr />
				</Show>
				<ExportButton rows=rows layout=layout />
				<hr />
				<ContactForm />
				<Footer />
			</main>
		</div>
	}
}
