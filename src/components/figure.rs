use leptos::prelude::*;
use log::error;

use crate::chart::render_confidence_chart;
use crate::error::Result;
use crate::network::{LayoutOptions, render_network};
use crate::predictions::PredictionRow;
use crate::raster::{CanvasSize, RasterImage};

/// Shows a rendered image, re-rendering whenever its inputs change.
#[component]
fn Figure<F>(title: &'static str, alt: &'static str, render: F) -> impl IntoView
where
	F: Fn() -> Result<Option<RasterImage>> + 'static,
{
	let image = RwSignal::new(None::<RasterImage>);
	let failure = RwSignal::new(None::<String>);

	Effect::new(move |_| match render() {
		Ok(rendered) => {
			failure.set(None);
			image.set(rendered);
		}
		Err(err) => {
			error!("{title} render failed: {err}");
			failure.set(Some(err.to_string()));
			image.set(None);
		}
	});

	view! {
		<section class="figure">
			<h3>{title}</h3>
			{move || image.get().map(|img| view! { <img class="raster" src=img.data_url() alt=alt /> })}
			{move || failure.get().map(|msg| view! { <p class="warning">{msg}</p> })}
		</section>
	}
}

#[component]
pub fn ConfidenceChart(#[prop(into)] rows: Signal<Vec<PredictionRow>>, size: CanvasSize) -> impl IntoView {
	view! {
		<Figure
			title="Combined Confidence Scores"
			alt="Prediction confidence by target"
			render=move || rows.with(|rows| render_confidence_chart(rows, size))
		/>
	}
}

/// On-page network; the PDF export renders through the same routine.
#[component]
pub fn NetworkView(
	#[prop(into)] rows: Signal<Vec<PredictionRow>>,
	#[prop(into)] layout: Signal<LayoutOptions>,
	size: CanvasSize,
) -> impl IntoView {
	view! {
		<Figure
			title="Advanced Drug–Target Network"
			alt="Drug-target network"
			render=move || layout.with(|layout| rows.with(|rows| render_network(rows, size, layout)))
		/>
	}
}
