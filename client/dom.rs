use iotid_charts::bar_chart::hydrate_bar_chart;
use iotid_view::alert::render_alert_stack;
use iotid_view::config::ElementIds;
use iotid_view::{Alert, AlertId, View};
use num_traits::ToPrimitive;
use std::time::Duration;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{
	Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
	HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};

#[wasm_bindgen]
extern "C" {
	#[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
	type Modal;

	#[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_class = Modal, js_name = getOrCreateInstance, catch)]
	fn get_or_create_instance(element: &Element) -> Result<Modal, JsValue>;

	#[wasm_bindgen(method)]
	fn show(this: &Modal);

	#[wasm_bindgen(method)]
	fn hide(this: &Modal);
}

/// The prediction page, bound to the live DOM.
pub struct DomView {
	window: Window,
	document: Document,
	elements: ElementIds,
}

enum Control {
	Input(HtmlInputElement),
	Select(HtmlSelectElement),
	TextArea(HtmlTextAreaElement),
}

impl Control {
	fn from_element(element: &Element) -> Option<Control> {
		if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
			Some(Control::Input(input.clone()))
		} else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
			Some(Control::Select(select.clone()))
		} else if let Some(text_area) = element.dyn_ref::<HtmlTextAreaElement>() {
			Some(Control::TextArea(text_area.clone()))
		} else {
			None
		}
	}

	fn name(&self) -> String {
		match self {
			Control::Input(input) => input.name(),
			Control::Select(select) => select.name(),
			Control::TextArea(text_area) => text_area.name(),
		}
	}

	fn value(&self) -> String {
		match self {
			Control::Input(input) => input.value(),
			Control::Select(select) => select.value(),
			Control::TextArea(text_area) => text_area.value(),
		}
	}

	fn set_value(&self, value: &str) {
		match self {
			Control::Input(input) => input.set_value(value),
			Control::Select(select) => select.set_value(value),
			Control::TextArea(text_area) => text_area.set_value(value),
		}
	}

	/// Whether the browser would include this control when submitting the form.
	fn is_submitted(&self) -> bool {
		match self {
			Control::Input(input) => {
				if input.disabled() {
					return false;
				}
				match input.type_().as_str() {
					"button" | "submit" | "reset" | "image" | "file" => false,
					"checkbox" | "radio" => input.checked(),
					_ => true,
				}
			}
			Control::Select(select) => !select.disabled(),
			Control::TextArea(text_area) => !text_area.disabled(),
		}
	}

	fn is_text_entry(&self) -> bool {
		match self {
			Control::Input(input) => !matches!(
				input.type_().as_str(),
				"button" | "submit" | "reset" | "image" | "file" | "checkbox" | "radio"
			),
			Control::Select(_) => false,
			Control::TextArea(_) => true,
		}
	}
}

impl DomView {
	pub fn new(window: Window, document: Document, elements: ElementIds) -> DomView {
		DomView {
			window,
			document,
			elements,
		}
	}

	pub fn element(&self, id: &str) -> Option<Element> {
		self.document.get_element_by_id(id)
	}

	fn form(&self) -> Option<HtmlFormElement> {
		self.element(&self.elements.form)?
			.dyn_into::<HtmlFormElement>()
			.ok()
	}

	fn form_controls(&self) -> Vec<Control> {
		let form = match self.form() {
			Some(form) => form,
			None => return Vec::new(),
		};
		let elements = form.elements();
		(0..elements.length())
			.filter_map(|index| elements.item(index))
			.filter_map(|element| Control::from_element(&element))
			.collect()
	}

	fn control(&self, id: &str) -> Option<Control> {
		self.element(id)
			.and_then(|element| Control::from_element(&element))
	}

	fn set_display(&self, id: &str, display: &str) {
		if let Some(element) = self
			.element(id)
			.and_then(|element| element.dyn_into::<HtmlElement>().ok())
		{
			element.style().set_property("display", display).ok();
		}
	}

	/// The fixed alert stack, appended to the body if the page does not have one yet.
	fn alert_stack(&self) -> Option<Element> {
		let id = &self.elements.alerts;
		if let Some(stack) = self.element(id) {
			return Some(stack);
		}
		let body = self.document.body()?;
		body.insert_adjacent_html("beforeend", &render_alert_stack(id))
			.ok()?;
		self.element(id)
	}
}

impl View for DomView {
	fn form_fields(&self) -> Vec<(String, String)> {
		self.form_controls()
			.into_iter()
			.filter(|control| control.is_submitted() && !control.name().is_empty())
			.map(|control| (control.name(), control.value()))
			.collect()
	}

	fn field_value(&self, id: &str) -> Option<String> {
		self.control(id).map(|control| control.value())
	}

	fn set_field_value(&self, id: &str, value: &str) -> bool {
		match self.control(id) {
			Some(control) => {
				control.set_value(value);
				true
			}
			None => false,
		}
	}

	fn set_field_invalid(&self, id: &str, invalid: bool) {
		if let Some(element) = self.element(id) {
			element
				.class_list()
				.toggle_with_force("is-invalid", invalid)
				.ok();
		}
	}

	fn clear_form(&self) {
		if let Some(form) = self.form() {
			form.reset();
		}
		for control in self.form_controls() {
			if control.is_text_entry() {
				control.set_value("");
			}
		}
		let marked = match self.document.query_selector_all(".is-invalid") {
			Ok(marked) => marked,
			Err(_) => return,
		};
		for index in 0..marked.length() {
			if let Some(element) = marked
				.get(index)
				.and_then(|node| node.dyn_into::<Element>().ok())
			{
				element.class_list().remove_1("is-invalid").ok();
			}
		}
	}

	fn set_result_html(&self, html: String) {
		if let Some(element) = self.element(&self.elements.prediction_result) {
			element.set_inner_html(&html);
		}
	}

	fn set_results_visible(&self, visible: bool) {
		let display = if visible { "block" } else { "none" };
		self.set_display(&self.elements.results, display);
	}

	fn hydrate_chart(&self, id: &str) {
		if let Err(error) = hydrate_bar_chart(id) {
			tracing::warn!(id, error = ?error, "failed to draw chart");
		}
	}

	fn scroll_into_view(&self, id: &str) -> bool {
		match self.element(id) {
			Some(element) => {
				let mut options = ScrollIntoViewOptions::new();
				options.behavior(ScrollBehavior::Smooth);
				element.scroll_into_view_with_scroll_into_view_options(&options);
				true
			}
			None => false,
		}
	}

	fn set_loading_visible(&self, visible: bool) {
		let element = match self.element(&self.elements.loading) {
			Some(element) => element,
			None => return,
		};
		match Modal::get_or_create_instance(&element) {
			Ok(modal) if visible => modal.show(),
			Ok(modal) => modal.hide(),
			// Without bootstrap, toggle the overlay directly.
			Err(_) => {
				let display = if visible { "block" } else { "none" };
				self.set_display(&self.elements.loading, display);
			}
		}
		if !visible {
			remove_modal_backdrops(&self.document);
		}
	}

	fn append_alert(&self, alert: &Alert) {
		match self.alert_stack() {
			Some(stack) => {
				if let Err(error) = stack.insert_adjacent_html("beforeend", &alert.render()) {
					tracing::warn!(error = ?error, "failed to show alert");
				}
			}
			None => tracing::warn!("no body to show alerts in"),
		}
	}

	fn remove_alert(&self, id: AlertId) -> bool {
		match self.element(&id.element_id()) {
			Some(element) => {
				element.remove();
				true
			}
			None => false,
		}
	}

	fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
		let callback = Closure::once_into_js(move || task());
		let timeout = delay.as_millis().to_i32().unwrap_or(i32::MAX);
		if let Err(error) = self
			.window
			.set_timeout_with_callback_and_timeout_and_arguments_0(
				callback.unchecked_ref(),
				timeout,
			) {
			tracing::warn!(error = ?error, "failed to schedule task");
		}
	}
}

/// Hiding the loading modal can leave its backdrop behind, which blocks the page.
pub fn remove_modal_backdrops(document: &Document) {
	if let Ok(backdrops) = document.query_selector_all(".modal-backdrop") {
		for index in 0..backdrops.length() {
			if let Some(backdrop) = backdrops
				.get(index)
				.and_then(|node| node.dyn_into::<Element>().ok())
			{
				backdrop.remove();
			}
		}
	}
	if let Some(body) = document.body() {
		body.class_list().remove_1("modal-open").ok();
		let style = body.style();
		style.remove_property("overflow").ok();
		style.remove_property("padding-right").ok();
	}
}
