use crate::util::clamp_percent;
use html::{component, html, style};

/// A horizontal bar filled in proportion to a probability in [0, 1].
#[component]
pub fn ConfidenceBar(value: f64) {
	let fill_style = style! {
		"width" => format!("{}%", clamp_percent(value * 100.0)),
	};
	html! {
		<div class="confidence-bar">
			<div class="confidence-fill" style={fill_style}></div>
		</div>
	}
}

#[test]
fn test_confidence_bar() {
	let html = html!(<ConfidenceBar value={0.25} />).render_to_string();
	assert_eq!(
		html,
		r#"<div class="confidence-bar"><div class="confidence-fill" style="width: 25%;"></div></div>"#
	);
	let html = html!(<ConfidenceBar value={1.5} />).render_to_string();
	assert!(html.contains("width: 100%;"));
}
