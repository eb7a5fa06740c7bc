use leptos::prelude::*;

/// Multi-select over drug ids, one checkbox per drug.
#[component]
pub fn DrugFilter(
	#[prop(into)] drugs: Signal<Vec<String>>,
	selected: RwSignal<Vec<String>>,
) -> impl IntoView {
	let toggle = move |drug: String, checked: bool| {
		selected.update(|sel| {
			sel.retain(|d| *d != drug);
			if checked {
				sel.push(drug);
			}
		});
	};

	view! {
		<fieldset class="drug-filter">
			<legend>"Select Drug IDs"</legend>
			{move || {
				drugs
					.get()
					.into_iter()
					.map(|drug| {
						let id = drug.clone();
						let checked = {
							let drug = drug.clone();
							move || selected.with(|sel| sel.contains(&drug))
						};
						view! {
							<label class="drug-option">
								<input
									type="checkbox"
									prop:checked=checked
									on:change=move |ev| toggle(id.clone(), event_target_checked(&ev))
								/>
								{drug}
							</label>
						}
					})
					.collect_view()
			}}
			<div class="filter-actions">
				<button on:click=move |_| selected.set(drugs.get_untracked())>"Select all"</button>
				<button on:click=move |_| selected.set(Vec::new())>"Clear"</button>
			</div>
		</fieldset>
	}
}
