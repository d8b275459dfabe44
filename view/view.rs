use crate::alert::{Alert, AlertId};
use std::time::Duration;

/// The page as the controller sees it. The client implements this over the DOM, and tests implement it in memory.
pub trait View {
	/// Every named field of the prediction form with its current value, in document order.
	fn form_fields(&self) -> Vec<(String, String)>;

	fn field_value(&self, id: &str) -> Option<String>;

	/// Returns false if there is no field with this id.
	fn set_field_value(&self, id: &str, value: &str) -> bool;

	fn set_field_invalid(&self, id: &str, invalid: bool);

	/// Reset the form, blank every field, and clear every invalid mark.
	fn clear_form(&self);

	fn set_result_html(&self, html: String);

	fn set_results_visible(&self, visible: bool);

	/// Draw the chart whose container was rendered into the result.
	fn hydrate_chart(&self, id: &str);

	/// Smoothly scroll the element with this id into view. Returns false if it does not exist.
	fn scroll_into_view(&self, id: &str) -> bool;

	fn set_loading_visible(&self, visible: bool);

	fn append_alert(&self, alert: &Alert);

	/// Returns false if the alert was already dismissed.
	fn remove_alert(&self, id: AlertId) -> bool;

	fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}
