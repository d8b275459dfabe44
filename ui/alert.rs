use html::{component, html, style};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
	Info,
	Success,
	Danger,
}

impl Level {
	pub fn as_str(self) -> &'static str {
		match self {
			Level::Info => "info",
			Level::Success => "success",
			Level::Danger => "danger",
		}
	}
}

#[component]
pub fn Alert(id: Option<String>, level: Level, dismissible: bool) {
	let class = if dismissible {
		format!("alert alert-{} alert-dismissible fade show", level.as_str())
	} else {
		format!("alert alert-{} fade show", level.as_str())
	};
	let close_button = if dismissible {
		Some(html! {
			<button
				aria-label="Close"
				class="btn-close"
				data-bs-dismiss="alert"
				type="button"
			></button>
		})
	} else {
		None
	};
	html! {
		<div class={class} id={id} role="alert">
			{children}
			{close_button}
		</div>
	}
}

/// Alerts stack inside this box, pinned to the top right corner of the viewport.
#[component]
pub fn AlertStack(id: String) {
	let style = style! {
		"position" => "fixed",
		"top" => "20px",
		"right" => "20px",
		"z-index" => "9999",
		"min-width" => "300px",
	};
	html! {
		<div class="alert-stack" id={id} style={style}>
			{children}
		</div>
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_alert() {
		let html = html! {
			<Alert id={Some("alert-3".to_owned())} level={Level::Danger} dismissible={true}>
				{"Prediction failed: bad input"}
			</Alert>
		}
		.render_to_string();
		insta::assert_snapshot!(html, @r###"<div class="alert alert-danger alert-dismissible fade show" id="alert-3" role="alert">Prediction failed: bad input<button aria-label="Close" class="btn-close" data-bs-dismiss="alert" type="button"></button></div>"###);
	}

	#[test]
	fn test_alert_not_dismissible() {
		let html = html! {
			<Alert id={None} level={Level::Info} dismissible={false}>
				{"Sample data from: Thermostat"}
			</Alert>
		}
		.render_to_string();
		assert_eq!(
			html,
			r#"<div class="alert alert-info fade show" role="alert">Sample data from: Thermostat</div>"#
		);
	}

	#[test]
	fn test_alert_stack_is_pinned() {
		let html = html!(<AlertStack id={"alertStack".to_owned()} />).render_to_string();
		insta::assert_snapshot!(html, @r###"<div class="alert-stack" id="alertStack" style="position: fixed;top: 20px;right: 20px;z-index: 9999;min-width: 300px;"></div>"###);
	}
}
