use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::config::DashboardConfig;
use crate::predictions::PredictionRow;
use crate::pubmed::{ABSTRACT_MISSING_MESSAGE, FETCH_FAILED_MESSAGE, fetch_abstract};

#[derive(Clone, Debug, PartialEq)]
enum AbstractState {
	Loading,
	Found(String),
	Missing,
	Failed,
}

/// One "Show Full Abstract" button per validated row.
#[component]
pub fn AbstractList(#[prop(into)] rows: Signal<Vec<PredictionRow>>) -> impl IntoView {
	view! {
		<section class="abstracts">
			<h3>"PubMed Abstracts"</h3>
			{move || {
				rows.get()
					.into_iter()
					.filter_map(|row| row.validation.is_validated().then_some(row.pubmed_id).flatten())
					.map(|pmid| view! { <AbstractItem pmid=pmid /> })
					.collect_view()
			}}
		</section>
	}
}

#[component]
fn AbstractItem(pmid: u64) -> impl IntoView {
	let config = expect_context::<DashboardConfig>();
	let state = RwSignal::new(None::<AbstractState>);

	let on_click = move |_| {
		if state.get_untracked() == Some(AbstractState::Loading) {
			return;
		}
		state.set(Some(AbstractState::Loading));
		let pubmed = config.pubmed.clone();
		spawn_local(async move {
			let next = match fetch_abstract(&pubmed, pmid).await {
				Ok(Some(text)) => AbstractState::Found(text),
				Ok(None) => AbstractState::Missing,
				Err(err) => {
					warn!("Abstract {pmid} unavailable: {err}");
					AbstractState::Failed
				}
			};
			state.set(Some(next));
		});
	};

	view! {
		<div class="abstract-item">
			<button on:click=on_click>{format!("Show Full Abstract for PubMed {pmid}")}</button>
			{move || {
				state
					.get()
					.map(|s| match s {
						AbstractState::Loading => view! { <p class="info">"Fetching abstract…"</p> }.into_any(),
						AbstractState::Found(text) => {
							view! {
								<p class="info">
									<strong>"Abstract: "</strong>
									{text}
								</p>
							}
								.into_any()
						}
						AbstractState::Missing => view! { <p class="warning">{ABSTRACT_MISSING_MESSAGE}</p> }.into_any(),
						AbstractState::Failed => view! { <p class="warning">{FETCH_FAILED_MESSAGE}</p> }.into_any(),
					})
			}}
		</div>
	}
}
