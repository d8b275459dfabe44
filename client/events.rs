use crate::dom::remove_modal_backdrops;
use crate::App;
use iotid_view::{AlertId, Shortcut};
use std::rc::Rc;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent};

pub fn bind(app: &Rc<App>, document: &Document) -> Result<(), JsValue> {
	if let Some(form) = document.get_element_by_id(&app.config().elements.form) {
		let submit_app = app.clone();
		listen(&form, "submit", move |event| {
			event.prevent_default();
			spawn_local(submit_app.clone().submit_prediction());
		})?;
	}
	let input_app = app.clone();
	listen(document, "input", move |event| {
		if let Some(target) = event_element(&event) {
			if let Some(id) = revalidated_field(&target.class_name(), &target.id()) {
				input_app.handle_input(id);
			}
		}
	})?;
	for button in query_all(document, "[data-action=\"load-sample\"]")? {
		let app = app.clone();
		listen(&button, "click", move |_| {
			spawn_local(app.clone().load_sample_data());
		})?;
	}
	for button in query_all(document, "[data-action=\"clear-form\"]")? {
		let app = app.clone();
		listen(&button, "click", move |_| app.clear_form())?;
	}
	for anchor in query_all(document, "a[href^=\"#\"]")? {
		let target = anchor
			.get_attribute("href")
			.map(|href| href.trim_start_matches('#').to_owned())
			.unwrap_or_default();
		if target.is_empty() {
			continue;
		}
		let app = app.clone();
		listen(&anchor, "click", move |event| {
			event.prevent_default();
			app.scroll_to_section(&target);
		})?;
	}
	for link in query_all(document, "[data-scroll-to]")? {
		let app = app.clone();
		let target = link.get_attribute("data-scroll-to").unwrap_or_default();
		listen(&link, "click", move |event| {
			event.prevent_default();
			app.scroll_to_section(&target);
		})?;
	}
	let shortcut_app = app.clone();
	listen(document, "keydown", move |event| {
		let event = match event.dyn_ref::<KeyboardEvent>() {
			Some(event) => event,
			None => return,
		};
		let shortcut = match Shortcut::from_key(&event.key(), event.ctrl_key()) {
			Some(shortcut) => shortcut,
			None => return,
		};
		if shortcut == Shortcut::Submit {
			event.prevent_default();
		}
		if let Some(submit) = shortcut_app.handle_shortcut(shortcut) {
			spawn_local(submit);
		}
	})?;
	let dismiss_app = app.clone();
	listen(document, "click", move |event| {
		if let Some(id) = event_element(&event).and_then(|target| dismissed_alert(&target)) {
			dismiss_app.dismiss_alert(id);
		}
	})?;
	if let Some(loading) = document.get_element_by_id(&app.config().elements.loading) {
		let document = document.clone();
		listen(&loading, "hidden.bs.modal", move |_| remove_modal_backdrops(&document))?;
	}
	Ok(())
}

fn listen(
	target: &EventTarget,
	event_type: &str,
	handler: impl Fn(Event) + 'static,
) -> Result<(), JsValue> {
	let callback_fn = Closure::wrap(Box::new(handler) as Box<dyn Fn(Event)>);
	target.add_event_listener_with_callback(event_type, callback_fn.as_ref().unchecked_ref())?;
	callback_fn.forget();
	Ok(())
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
	let nodes = document.query_selector_all(selector)?;
	Ok((0..nodes.length())
		.filter_map(|index| nodes.get(index))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect())
}

fn event_element(event: &Event) -> Option<Element> {
	event.target()?.dyn_into::<Element>().ok()
}

/// The alert whose close button was clicked, if any.
fn dismissed_alert(target: &Element) -> Option<AlertId> {
	target.closest(".btn-close").ok()??;
	let alert = target.closest(".alert").ok()??;
	alert
		.id()
		.strip_prefix("alert-")
		.and_then(|id| id.parse().ok())
		.map(AlertId)
}

/// Any `form-control` on the page with an id drops its invalid mark when edited.
fn revalidated_field<'a>(class_name: &str, id: &'a str) -> Option<&'a str> {
	let is_form_control = class_name
		.split_whitespace()
		.any(|class| class == "form-control");
	if is_form_control && !id.is_empty() {
		Some(id)
	} else {
		None
	}
}

#[test]
fn test_revalidated_field() {
	assert_eq!(revalidated_field("form-control is-invalid", "bytes"), Some("bytes"));
	assert_eq!(revalidated_field("form-control", ""), None);
	assert_eq!(revalidated_field("form-control-lg", "duration"), None);
	assert_eq!(revalidated_field("form-select", "protocol"), None);
}
