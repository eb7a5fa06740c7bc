use leptos::prelude::*;

use crate::predictions::PredictionRow;

const COLUMNS: [&str; 8] = [
	"Drug",
	"Drug_Name",
	"Disease",
	"Disease_Name",
	"Confidence",
	"Validation",
	"Title",
	"PubMed",
];

#[component]
pub fn PredictionTable(#[prop(into)] rows: Signal<Vec<PredictionRow>>) -> impl IntoView {
	view! {
		<div class="table-wrap">
			<table class="predictions">
				<thead>
					<tr>{COLUMNS.iter().map(|name| view! { <th>{*name}</th> }).collect_view()}</tr>
				</thead>
				<tbody>
					{move || rows.get().into_iter().map(|row| view! { <PredictionRowView row=row /> }).collect_view()}
				</tbody>
			</table>
		</div>
	}
}

#[component]
fn PredictionRowView(row: PredictionRow) -> impl IntoView {
	let pubmed = match (row.pubmed_link(), row.pubmed_id) {
		(Some(link), Some(id)) => view! {
			<a href=link target="_blank" rel="noopener">{id.to_string()}</a>
		}
		.into_any(),
		_ => view! { "N/A" }.into_any(),
	};

	view! {
		<tr class:validated=row.validation.is_validated()>
			<td>{row.drug}</td>
			<td>{row.drug_name}</td>
			<td>{row.disease}</td>
			<td>{row.disease_name}</td>
			<td class="num">{format!("{:.3}", row.confidence)}</td>
			<td>{row.validation.label()}</td>
			<td>{row.title}</td>
			<td>{pubmed}</td>
		</tr>
	}
}
