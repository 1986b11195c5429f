use leptos::prelude::*;

use crate::components::circle_graph::{CircleGraphCanvas, GraphStyle};

/// Build an n-cycle spec string such as `"1=2,2=3,3=1"`.
fn sample_cycle_spec(n: usize) -> String {
	(1..=n)
		.map(|i| format!("{}={}", i, if i == n { 1 } else { i + 1 }))
		.collect::<Vec<_>>()
		.join(",")
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// The spec is owned here and re-read by the canvas every frame.
	let spec = Signal::derive(move || Some(sample_cycle_spec(12)));

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

			<div class="graph-page">
				<CircleGraphCanvas spec=spec style=GraphStyle::default() />
				<div class="graph-caption">
					<h1>"Circular Graph"</h1>
					<p class="subtitle">"Vertices spaced evenly on a circle, edges drawn as chords."</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
