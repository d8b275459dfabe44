use html::html;
use std::cell::Cell;

pub use iotid_ui::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(pub u64);

impl AlertId {
	/// The id of the alert's element in the alert stack.
	pub fn element_id(self) -> String {
		format!("alert-{}", self.0)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
	pub id: AlertId,
	pub level: Level,
	pub message: String,
}

impl Alert {
	pub fn render(&self) -> String {
		html! {
			<iotid_ui::Alert
				id={Some(self.id.element_id())}
				level={self.level}
				dismissible={true}
			>
				{self.message.clone()}
			</iotid_ui::Alert>
		}
		.render_to_string()
	}
}

/// Markup for the empty alert stack, appended to the page body the first time an alert is shown.
pub fn render_alert_stack(id: &str) -> String {
	html!(<iotid_ui::AlertStack id={id.to_owned()} />).render_to_string()
}

#[derive(Default)]
pub struct AlertIds {
	next: Cell<u64>,
}

impl AlertIds {
	pub fn next(&self) -> AlertId {
		let id = self.next.get();
		self.next.set(id + 1);
		AlertId(id)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_alert_ids_are_unique() {
		let ids = AlertIds::default();
		assert_eq!(ids.next(), AlertId(0));
		assert_eq!(ids.next(), AlertId(1));
		assert_eq!(AlertId(7).element_id(), "alert-7");
	}

	#[test]
	fn test_render_escapes_message() {
		let alert = Alert {
			id: AlertId(2),
			level: Level::Danger,
			message: "Network error: <timeout>".to_owned(),
		};
		insta::assert_snapshot!(alert.render(), @r###"<div class="alert alert-danger alert-dismissible fade show" id="alert-2" role="alert">Network error: &lt;timeout&gt;<button aria-label="Close" class="btn-close" data-bs-dismiss="alert" type="button"></button></div>"###);
	}

	#[test]
	fn test_alert_stack_is_fixed_to_corner() {
		let html = render_alert_stack("alertStack");
		assert!(html.starts_with(r#"<div class="alert-stack" id="alertStack""#));
		assert!(html.contains("position: fixed;"));
		assert!(html.contains("top: 20px;right: 20px;"));
	}
}
