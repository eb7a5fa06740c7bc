use leptos::prelude::*;

/// Logo, title and welcome text.
#[component]
pub fn Header(logo_url: String) -> impl IntoView {
	view! {
		<header class="page-header">
			<img class="logo" src=logo_url alt="NetCure.ai logo" width="350" />
			<h1>"NetCure.ai – Multi-Drug Target Predictions"</h1>
			<h3>"Drug Repositioning Predictions using Network-based AI"</h3>
			<p>
				"Welcome to " <strong>"NetCure.ai"</strong>
				" — your AI-powered tool for discovering new uses for existing drugs using advanced network-based learning and real-time PubMed validation."
			</p>
		</header>
	}
}

/// Collapsible "About Us" panel.
#[component]
pub fn AboutPanel() -> impl IntoView {
	view! {
		<details class="expander">
			<summary>"About Us"</summary>
			<h4>"Who We Are"</h4>
			<p>
				"NetCure.ai is a pioneering AI-powered platform designed to transform how researchers, clinicians, and biotech innovators discover new therapeutic uses for existing drugs."
			</p>
			<p>
				"Our mission is to make drug repositioning faster, smarter, and more evidence-based by combining powerful graph-based AI with real-time biomedical validation."
			</p>
			<h4>"What We Do"</h4>
			<p>
				"NetCure.ai builds intelligent, multi-layered biomedical networks that connect drugs, diseases, genes, and proteins. It predicts potential new drug–disease relationships that may otherwise remain hidden in isolated datasets."
			</p>
			<p>
				"Each prediction is backed by real-time PubMed validation to ensure only the strongest, evidence-supported repositioning opportunities reach your screen."
			</p>
			<h4>"How It Works"</h4>
			<ul>
				<li><strong>"Data Integration: "</strong>"Combines trusted biomedical sources such as DrugBank, PubMed, OMIM, and others."</li>
				<li><strong>"Graph-Based Learning: "</strong>"Represents complex interactions in a network of up to 30,000 meaningful nodes."</li>
				<li><strong>"Smart Filtering: "</strong>"Automatically removes low-confidence or noisy nodes to keep the model light and robust."</li>
				<li><strong>"Real-Time Validation: "</strong>"Validates potential predictions against up-to-date PubMed entries."</li>
				<li><strong>"User-Friendly Interface: "</strong>"A clean, simple web app for maximum accessibility."</li>
			</ul>
			<h4>"Why NetCure.ai is Different"</h4>
			<ul>
				<li><strong>"Network-First: "</strong>"Unlike simple text mining tools, NetCure.ai understands and learns from the complex relationships between biomedical entities."</li>
				<li><strong>"Up-to-Date: "</strong>"Your predictions are always supported by current research, thanks to PubMed API integration."</li>
				<li><strong>"Lightweight & Fast: "</strong>"Node pruning keeps the graph model efficient and stable, even on personal devices."</li>
				<li><strong>"Easy to Use: "</strong>"No advanced programming skills needed. Just input, predict, and explore results visually."</li>
			</ul>
			<h4>"Our Vision"</h4>
			<p>
				"NetCure.ai is built to empower scientists and healthcare professionals to find new treatments faster, reduce R&D costs, and bring promising repositioning candidates to light."
			</p>
			<p><strong>"Together, let’s accelerate the discovery of new cures."</strong></p>
			<p><strong>"Welcome to NetCure.ai platform!"</strong></p>
		</details>
	}
}

/// Sidebar notes on reading the predictions.
#[component]
pub fn InterpretationSidebar() -> impl IntoView {
	view! {
		<aside class="sidebar">
			<h2>"How to Interpret Predictions"</h2>
			<details class="expander">
				<summary>"Confidence Score Explained"</summary>
				<p>
					"The confidence score (0 to 1) shows how likely the drug–target link is real, based on the Node2Vec + Logistic Regression model. A higher score means stronger biological evidence."
				</p>
			</details>
			<details class="expander">
				<summary>"Drug–Target Network Explained"</summary>
				<p>
					"The network graph displays drugs (blue) and predicted targets (green). Green edges mean PubMed-validated, red means novel. Edge width shows prediction confidence."
				</p>
			</details>
			<details class="expander">
				<summary>"Overall Prediction Summary"</summary>
				<p>
					"These predictions include validated links (with PubMed IDs) and possible novel links. Use the tool to compare drugs, view PubMed-backed evidence, and export reports for your research."
				</p>
			</details>
		</aside>
	}
}

/// Copyright line.
#[component]
pub fn Footer() -> impl IntoView {
	view! {
		<footer class="page-footer">
			<hr />
			<p>"© 2025 NetCure.ai. All rights reserved. For research purpose only."</p>
		</footer>
	}
}
