use leptos::prelude::*;

use crate::components::relation_graph::RelationCanvas;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="trainer-page">
				<h1>"Binary Relation Trainer"</h1>
				<p class="subtitle">
					"Add elements, then click one element and another to draw an arrow between them. Click empty canvas while an element is selected to give it a loop."
				</p>
				<RelationCanvas width=Some(800.0) height=Some(500.0) />
			</div>
		</ErrorBoundary>
	}
}
