use crate::bar_chart::BarChartOptions;
use html::{component, html, style};

/// The chart is drawn client side by `hydrate_bar_chart`, which reads the options back out of `data-options`.
#[component]
pub fn BarChart(id: Option<String>, options: BarChartOptions) {
	let options = serde_json::to_string(&options).unwrap_or_default();
	let container_style = style! {
		"height" => "400px",
		"width" => "100%",
	};
	html! {
		<div
			class="chart-container"
			data-chart-type="bar"
			data-options={options}
			id={id}
			style={container_style}
		>
			<noscript>
				<div class="chart-noscript">
					{"Enable JavaScript to see the confidence chart."}
				</div>
			</noscript>
		</div>
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::bar_chart::{BarChartPoint, BarChartSeries};

	#[test]
	fn test_bar_chart_embeds_options() {
		let options = BarChartOptions {
			series: vec![BarChartSeries {
				color: "red".to_owned(),
				border_color: None,
				data: vec![BarChartPoint {
					label: "TV".to_owned(),
					y: Some(12.5),
					color: None,
					border_color: None,
				}],
				title: None,
			}],
			title: None,
			x_axis_label_rotation: None,
			y_axis_grid_line_interval: None,
			y_axis_label_suffix: None,
			y_max: Some(100.0),
			y_min: Some(0.0),
		};
		let html = html!(<BarChart id={Some("confidenceChart".to_owned())} options={options.clone()} />)
			.render_to_string();
		assert!(html.contains(r#"id="confidenceChart""#));
		assert!(html.contains(r#"data-chart-type="bar""#));
		assert!(html.contains("<noscript>"));
		let start = html.find("data-options=\"").unwrap() + "data-options=\"".len();
		let end = start + html[start..].find('"').unwrap();
		let json = html[start..end].replace("&quot;", "\"");
		let parsed: BarChartOptions = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed, options);
	}
}
