use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::render;
use super::types::{EdgeStyler, GraphStyle};

/// Square canvas that repaints the graph on every animation frame.
///
/// The spec signal is externally owned: each frame re-reads its current
/// value, so whoever holds the signal can swap the graph at any time and
/// the next frame picks it up. `None` (or an empty string) paints a
/// background-only frame.
#[component]
pub fn CircleGraphCanvas(
	#[prop(into)] spec: Signal<Option<String>>,
	#[prop(optional)] style: GraphStyle,
	#[prop(default = None)] edge_style: Option<EdgeStyler>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let animate_init = animate.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		canvas.set_width(style.canvas_size as u32);
		canvas.set_height(style.canvas_size as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let (frame_style, frame_edge_style) = (style.clone(), edge_style.clone());
		let animate_inner = animate_init.clone();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let current = spec.get_untracked();
			render::render_frame(
				current.as_deref(),
				&frame_style,
				frame_edge_style.as_ref(),
				&ctx,
			);
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! { <canvas node_ref=canvas_ref class="circle-graph-canvas" style="display: block;" /> }
}
