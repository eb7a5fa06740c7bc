use leptos::prelude::*;
use log::error;

use crate::config::DashboardConfig;
use crate::export::export_report;
use crate::network::LayoutOptions;
use crate::predictions::PredictionRow;

#[component]
pub fn ExportButton(
	#[prop(into)] rows: Signal<Vec<PredictionRow>>,
	#[prop(into)] layout: Signal<LayoutOptions>,
) -> impl IntoView {
	let config = expect_context::<DashboardConfig>();
	let status = RwSignal::new(None::<Result<String, String>>);

	let on_click = move |_| {
		let rows = rows.get_untracked();
		let layout = layout.get_untracked();
		let outcome = export_report(&rows, &config, &layout)
			.map(|()| format!("Downloaded {}", config.report_file_name))
			.map_err(|err| {
				error!("PDF export failed: {err}");
				format!("Could not build the PDF report: {err}")
			});
		status.set(Some(outcome));
	};

	view! {
		<section class="export">
			<h3>"Export All Predictions to PDF"</h3>
			<button on:click=on_click disabled=move || rows.with(Vec::is_empty)>
				"Download PDF"
			</button>
			{move || {
				status
					.get()
					.map(|outcome| match outcome {
						Ok(msg) => view! { <p class="success">{msg}</p> }.into_any(),
						Err(msg) => view! { <p class="warning">{msg}</p> }.into_any(),
					})
			}}
		</section>
	}
}
