use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::{Property, RelationState};

type SharedState = Rc<RefCell<Option<RelationState>>>;

/// Canvas widget for drawing a binary relation and checking its properties.
///
/// The model lives behind a `RefCell` owned by this component and is only
/// touched inside input-event handlers; each mutation is followed by a
/// synchronous redraw, so there is no animation loop to keep in sync.
#[component]
pub fn RelationCanvas(
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let (name, set_name) = signal(String::new());
	let (banner, set_banner) = signal(None::<(String, bool)>);

	let state_init = state.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(500.0)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let seed = js_sys::Date::now() as u64;
		*state_init.borrow_mut() = Some(RelationState::new(w, h, seed));
		if let Some(ref model) = *state_init.borrow() {
			render::render(model, &context_2d(&canvas));
		}
	});

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut model) = *state_click.borrow_mut() {
			model.select_or_connect(x, y);
			render::render(model, &context_2d(&canvas));
		}
	};

	let state_add = state.clone();
	let on_add = move |_: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		if let Some(ref mut model) = *state_add.borrow_mut() {
			match model.add_node(&name.get()) {
				Ok(_) => {
					set_name.set(String::new());
					render::render(model, &context_2d(&canvas));
				}
				Err(err) => set_banner.set(Some((err.to_string(), false))),
			}
		}
	};

	let state_remove = state.clone();
	let on_remove = move |_: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		if let Some(ref mut model) = *state_remove.borrow_mut() {
			match model.remove_selected() {
				Ok(()) => render::render(model, &context_2d(&canvas)),
				Err(err) => set_banner.set(Some((err.to_string(), false))),
			}
		}
	};

	let on_check_reflexive = check_handler(state.clone(), set_banner, Property::Reflexive);
	let on_check_symmetric = check_handler(state.clone(), set_banner, Property::Symmetric);
	let on_check_transitive = check_handler(state.clone(), set_banner, Property::Transitive);

	view! {
		<div class="relation-widget">
			<div class="relation-toolbar">
				<input
					type="text"
					placeholder="Element name"
					prop:value=move || name.get()
					on:input=move |ev| set_name.set(event_target_value(&ev))
				/>
				<button on:click=on_add>"Add"</button>
				<button on:click=on_remove>"Remove selected"</button>
				<button on:click=on_check_reflexive>"Check reflexivity"</button>
				<button on:click=on_check_symmetric>"Check symmetry"</button>
				<button on:click=on_check_transitive>"Check transitivity"</button>
			</div>
			<canvas node_ref=canvas_ref class="relation-canvas" on:click=on_click />
			{move || {
				banner
					.get()
					.map(|(text, success)| {
						let class = if success {
							"alert alert-success"
						} else {
							"alert alert-danger"
						};
						view! { <div class=class>{text}</div> }
					})
			}}
		</div>
	}
}

/// Property verdicts and model errors share the banner, so every check
/// button is the same handler over a different predicate.
fn check_handler(
	state: SharedState,
	set_banner: WriteSignal<Option<(String, bool)>>,
	property: Property,
) -> impl FnMut(MouseEvent) + 'static {
	move |_| {
		if let Some(ref model) = *state.borrow() {
			let holds = model.check(property);
			set_banner.set(Some((property.verdict(holds).to_string(), holds)));
		}
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> CanvasRenderingContext2d {
	canvas
		.get_context("2d")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap()
}
