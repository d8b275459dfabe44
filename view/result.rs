use crate::device::{device_icon, format_device_name};
use crate::prediction::PredictionResult;
use html::{component, html};
use iotid_charts::bar_chart::{BarChartOptions, BarChartPoint, BarChartSeries};
use iotid_charts::components::BarChart;
use iotid_charts::palette_color;
use iotid_ui::{clamp_percent, format_percent, ConfidenceBar};

pub fn render_prediction_result(result: &PredictionResult, chart_id: &str) -> String {
	html! {
		<PredictionResultCard
			result={result.clone()}
			chart_id={chart_id.to_owned()}
		/>
	}
	.render_to_string()
}

#[component]
pub fn PredictionResultCard(result: PredictionResult, chart_id: String) {
	let confidence = result.confidence();
	let chart_options = confidence_chart_options(&result.sorted_confidence);
	html! {
		<>
			<div class="result-card fade-in">
				<PredictionSummary
					predicted_class={result.predicted_class}
					confidence={confidence}
				/>
				<ConfidenceBreakdown entries={result.sorted_confidence} />
			</div>
			<div class="chart-section">
				<BarChart id={Some(chart_id)} options={chart_options} />
			</div>
		</>
	}
}

#[component]
fn PredictionSummary(predicted_class: String, confidence: f64) {
	let icon = device_icon(&predicted_class);
	html! {
		<div class="text-center mb-4">
			<div class="device-icon">
				<i class={icon}></i>
			</div>
			<h2 class="mb-3">
				{format!("Predicted Device: {}", format_device_name(&predicted_class))}
			</h2>
			<div class="confidence-score">
				<h4>{format!("Confidence: {}", format_percent(confidence))}</h4>
			</div>
		</div>
	}
}

#[component]
fn ConfidenceBreakdown(entries: Vec<(String, f64)>) {
	let rows = entries
		.into_iter()
		.map(|(label, confidence)| {
			html! {
				<ConfidenceRow label={label} confidence={confidence} />
			}
		})
		.collect::<Vec<_>>();
	html! {
		<div class="confidence-breakdown">
			<h5 class="mb-3">{"Confidence Breakdown:"}</h5>
			{rows}
		</div>
	}
}

#[component]
fn ConfidenceRow(label: String, confidence: f64) {
	html! {
		<div class="mb-2">
			<div class="d-flex justify-content-between align-items-center mb-1">
				<span class="fw-bold">{format_device_name(&label)}</span>
				<span>{format_percent(confidence)}</span>
			</div>
			<ConfidenceBar value={confidence} />
		</div>
	}
}

/// One bar per class in ranked order, each in its own palette color, on a 0 to 100 percent scale.
pub fn confidence_chart_options(sorted_confidence: &[(String, f64)]) -> BarChartOptions {
	let data = sorted_confidence
		.iter()
		.enumerate()
		.map(|(index, (label, confidence))| {
			let color = palette_color(index);
			BarChartPoint {
				label: format_device_name(label),
				y: Some(clamp_percent(confidence * 100.0)),
				color: Some(color.fill.to_owned()),
				border_color: Some(color.border.to_owned()),
			}
		})
		.collect();
	let color = palette_color(0);
	BarChartOptions {
		series: vec![BarChartSeries {
			color: color.fill.to_owned(),
			border_color: Some(color.border.to_owned()),
			data,
			title: None,
		}],
		title: Some("Device Classification Confidence Scores".to_owned()),
		x_axis_label_rotation: Some(45.0),
		y_axis_grid_line_interval: Some(20.0),
		y_axis_label_suffix: Some("%".to_owned()),
		y_max: Some(100.0),
		y_min: Some(0.0),
	}
}
