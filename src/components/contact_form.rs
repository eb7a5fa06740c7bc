use leptos::prelude::*;
use log::info;

/// Outcome of submitting the contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
	Rejected(&'static str),
	Accepted(String),
}

/// Email and message are required; the name is only used in the greeting.
pub fn validate_contact(name: &str, email: &str, message: &str) -> ContactOutcome {
	if email.trim().is_empty() {
		ContactOutcome::Rejected("Please enter your email.")
	} else if message.trim().is_empty() {
		ContactOutcome::Rejected("Please enter your query.")
	} else {
		ContactOutcome::Accepted(format!("Thanks, {}! We received your query.", name.trim()))
	}
}

#[component]
pub fn ContactForm() -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());
	let outcome = RwSignal::new(None::<ContactOutcome>);

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		let result = name.with(|n| email.with(|e| message.with(|m| validate_contact(n, e, m))));
		if matches!(result, ContactOutcome::Accepted(_)) {
			info!("Contact query submitted");
		}
		outcome.set(Some(result));
	};

	view! {
		<section class="contact">
			<h2>"Contact Us"</h2>
			<form on:submit=on_submit>
				<label>
					"Your Name"
					<input type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev)) />
				</label>
				<label>
					"Your Email"
					<input type="email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev)) />
				</label>
				<label>
					"Your Query Here"
					<textarea prop:value=move || message.get() on:input=move |ev| message.set(event_target_value(&ev))></textarea>
				</label>
				<button type="submit">"Submit"</button>
			</form>
			{move || {
				outcome
					.get()
					.map(|o| match o {
						ContactOutcome::Rejected(msg) => view! { <p class="error">{msg}</p> }.into_any(),
						ContactOutcome::Accepted(msg) => view! { <p class="success">{msg}</p> }.into_any(),
					})
			}}
		</section>
	}
}
