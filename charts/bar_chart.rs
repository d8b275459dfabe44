use crate::{
	common::{
		compute_grid_lines, draw_rounded_rect, estimate_text_width, DrawRoundedRectOptions,
		GridLine, Rect,
	},
	config::{ChartConfig, CHART_CONFIG},
};
use num_traits::ToPrimitive;
use wasm_bindgen::{JsCast, JsValue};

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct BarChartOptions {
	pub series: Vec<BarChartSeries>,
	pub title: Option<String>,
	pub x_axis_label_rotation: Option<f64>,
	pub y_axis_grid_line_interval: Option<f64>,
	pub y_axis_label_suffix: Option<String>,
	pub y_max: Option<f64>,
	pub y_min: Option<f64>,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct BarChartSeries {
	pub color: String,
	pub border_color: Option<String>,
	pub data: Vec<BarChartPoint>,
	pub title: Option<String>,
}

/// A point may override its series colors, which is how a single series gets one color per bar.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct BarChartPoint {
	pub label: String,
	pub y: Option<f64>,
	pub color: Option<String>,
	pub border_color: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChartLayout {
	pub chart_box: Rect,
	pub title: Option<String>,
	pub bars: Vec<BarLayout>,
	pub x_axis_labels: Vec<XAxisLabel>,
	pub y_axis_grid_lines: Vec<YAxisGridLine>,
	pub x_axis_label_rotation: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
	pub border_color: String,
	pub color: String,
	pub label: String,
	pub rect: Rect,
	pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct XAxisLabel {
	pub text: String,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct YAxisGridLine {
	pub label: String,
	pub y: f64,
}

impl BarChartOptions {
	fn y_range(&self) -> (f64, f64) {
		let values = || {
			self.series
				.iter()
				.flat_map(|series| series.data.iter().filter_map(|point| point.y))
				.filter(|y| y.is_finite())
		};
		let y_min = self
			.y_min
			.unwrap_or_else(|| values().fold(0.0f64, |min, y| min.min(y)));
		let mut y_max = self
			.y_max
			.unwrap_or_else(|| values().fold(0.0f64, |max, y| max.max(y)));
		if !(y_max > y_min) {
			y_max = y_min + 1.0;
		}
		(y_min, y_max)
	}
}

pub fn compute_bar_chart_layout(options: &BarChartOptions, width: f64, height: f64) -> BarChartLayout {
	compute_bar_chart_layout_with_config(options, width, height, &CHART_CONFIG)
}

pub fn compute_bar_chart_layout_with_config(
	options: &BarChartOptions,
	width: f64,
	height: f64,
	config: &ChartConfig,
) -> BarChartLayout {
	let (y_min, y_max) = options.y_range();
	let rotation = options.x_axis_label_rotation.unwrap_or(0.0).to_radians();
	let group_count = options
		.series
		.iter()
		.map(|series| series.data.len())
		.max()
		.unwrap_or(0);
	let group_labels: Vec<String> = (0..group_count)
		.map(|index| {
			options
				.series
				.iter()
				.find_map(|series| series.data.get(index))
				.map(|point| point.label.clone())
				.unwrap_or_default()
		})
		.collect();

	// Compute the boxes.
	let title_height = if options.title.is_some() {
		config.title_font_size + config.label_padding
	} else {
		0.0
	};
	let widest_label = group_labels
		.iter()
		.map(|label| estimate_text_width(label, config.font_size))
		.fold(0.0f64, f64::max);
	let x_axis_labels_height = if group_count > 0 {
		widest_label * rotation.sin().abs() + config.font_size * rotation.cos().abs()
	} else {
		0.0
	};
	let chart_x = config.left_padding + config.y_axis_labels_width + config.label_padding;
	let chart_y = config.top_padding + title_height;
	let chart_box = Rect {
		x: chart_x,
		y: chart_y,
		w: (width - chart_x - config.right_padding).max(0.0),
		h: (height
			- chart_y - config.bottom_padding
			- x_axis_labels_height
			- config.label_padding)
			.max(0.0),
	};

	let value_to_pixels = |value: f64| -> f64 {
		let value = value.max(y_min).min(y_max);
		chart_box.y + chart_box.h * (1.0 - (value - y_min) / (y_max - y_min))
	};
	let baseline = value_to_pixels(0.0);

	// Compute the bars, one group per label, one bar per series within a group.
	let series_count = options.series.len().max(1).to_f64().unwrap_or(1.0);
	let group_width = if group_count > 0 {
		chart_box.w / group_count.to_f64().unwrap_or(1.0)
	} else {
		0.0
	};
	let group_gap = group_width * config.group_gap;
	let bar_width = (group_width - group_gap) / series_count;
	let mut bars = Vec::new();
	for group_index in 0..group_count {
		let group_x = chart_box.x + group_width * group_index.to_f64().unwrap_or(0.0);
		for (series_index, series) in options.series.iter().enumerate() {
			let point = match series.data.get(group_index) {
				Some(point) => point,
				None => continue,
			};
			let value = match point.y {
				Some(value) if value.is_finite() => value.max(y_min).min(y_max),
				_ => continue,
			};
			let top = value_to_pixels(value);
			let color = point.color.clone().unwrap_or_else(|| series.color.clone());
			let border_color = point
				.border_color
				.clone()
				.or_else(|| series.border_color.clone())
				.unwrap_or_else(|| color.clone());
			bars.push(BarLayout {
				border_color,
				color,
				label: point.label.clone(),
				rect: Rect {
					x: group_x + group_gap / 2.0 + bar_width * series_index.to_f64().unwrap_or(0.0),
					y: top.min(baseline),
					w: bar_width,
					h: (baseline - top).abs(),
				},
				value,
			});
		}
	}

	let x_axis_labels = group_labels
		.into_iter()
		.enumerate()
		.map(|(index, text)| XAxisLabel {
			text,
			x: chart_box.x + group_width * (index.to_f64().unwrap_or(0.0) + 0.5),
			y: chart_box.y + chart_box.h + config.label_padding,
		})
		.collect();

	let interval = options
		.y_axis_grid_line_interval
		.unwrap_or((y_max - y_min) / 5.0);
	let suffix = options.y_axis_label_suffix.as_deref().unwrap_or("");
	let y_axis_grid_lines = compute_grid_lines(y_min, y_max, interval, suffix)
		.into_iter()
		.map(|GridLine { label, value }| YAxisGridLine {
			label,
			y: value_to_pixels(value),
		})
		.collect();

	BarChartLayout {
		chart_box,
		title: options.title.clone(),
		bars,
		x_axis_labels,
		y_axis_grid_lines,
		x_axis_label_rotation: rotation,
	}
}

pub fn draw_bar_chart(
	ctx: &web_sys::CanvasRenderingContext2d,
	layout: &BarChartLayout,
	width: f64,
) -> Result<(), JsValue> {
	let config = &CHART_CONFIG;
	let BarChartLayout {
		chart_box,
		title,
		bars,
		x_axis_labels,
		y_axis_grid_lines,
		x_axis_label_rotation,
	} = layout;

	if let Some(title) = title {
		ctx.set_font(config.title_font);
		ctx.set_text_align("center");
		ctx.set_text_baseline("top");
		ctx.set_fill_style(&JsValue::from_str(config.label_color));
		ctx.fill_text(title, width / 2.0, config.top_padding)?;
	}

	// Draw the y axis grid lines and their labels.
	ctx.set_font(config.font);
	ctx.set_line_width(1.0);
	ctx.set_text_align("right");
	ctx.set_text_baseline("middle");
	for grid_line in y_axis_grid_lines.iter() {
		ctx.set_stroke_style(&JsValue::from_str(config.grid_line_color));
		ctx.begin_path();
		ctx.move_to(chart_box.x, grid_line.y);
		ctx.line_to(chart_box.x + chart_box.w, grid_line.y);
		ctx.stroke();
		ctx.set_fill_style(&JsValue::from_str(config.label_color));
		ctx.fill_text(
			&grid_line.label,
			chart_box.x - config.label_padding,
			grid_line.y,
		)?;
	}

	// Draw the x axis.
	ctx.set_stroke_style(&JsValue::from_str(config.axis_color));
	ctx.begin_path();
	ctx.move_to(chart_box.x, chart_box.y + chart_box.h);
	ctx.line_to(chart_box.x + chart_box.w, chart_box.y + chart_box.h);
	ctx.stroke();

	for bar in bars.iter() {
		draw_rounded_rect(DrawRoundedRectOptions {
			ctx,
			fill_color: &bar.color,
			radius: config.bar_radius,
			rect: bar.rect,
			stroke_color: &bar.border_color,
			stroke_width: config.bar_border_width,
		})?;
	}

	ctx.set_fill_style(&JsValue::from_str(config.label_color));
	for label in x_axis_labels.iter() {
		ctx.save();
		ctx.translate(label.x, label.y)?;
		if *x_axis_label_rotation != 0.0 {
			ctx.rotate(-x_axis_label_rotation)?;
			ctx.set_text_align("right");
			ctx.set_text_baseline("top");
		} else {
			ctx.set_text_align("center");
			ctx.set_text_baseline("top");
		}
		ctx.fill_text(&label.text, 0.0, 0.0)?;
		ctx.restore();
	}

	Ok(())
}

/// Read the options serialized into the container's `data-options` attribute and draw the chart into a fresh canvas.
pub fn hydrate_bar_chart(id: &str) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("no document"))?;
	let container = document
		.get_element_by_id(id)
		.ok_or_else(|| JsValue::from_str(&format!("no element with id {}", id)))?
		.dyn_into::<web_sys::HtmlElement>()?;
	let options = container
		.dataset()
		.get("options")
		.ok_or_else(|| JsValue::from_str("missing data-options"))?;
	let options: BarChartOptions =
		serde_json::from_str(&options).map_err(|error| JsValue::from_str(&error.to_string()))?;

	let canvas = document
		.create_element("canvas")?
		.dyn_into::<web_sys::HtmlCanvasElement>()?;
	container.style().set_property("position", "relative")?;
	canvas.style().set_property("position", "absolute")?;
	canvas.style().set_property("top", "0")?;
	canvas.style().set_property("left", "0")?;
	container.append_child(&canvas)?;

	let width = container.client_width().to_f64().unwrap_or(0.0);
	let height = container.client_height().to_f64().unwrap_or(0.0);
	let dpr = window.device_pixel_ratio();
	canvas.set_width((width * dpr).to_u32().unwrap_or(0));
	canvas.set_height((height * dpr).to_u32().unwrap_or(0));
	canvas
		.style()
		.set_property("width", &format!("{}px", width))?;
	canvas
		.style()
		.set_property("height", &format!("{}px", height))?;

	let ctx = canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("no 2d context"))?
		.dyn_into::<web_sys::CanvasRenderingContext2d>()?;
	ctx.scale(dpr, dpr)?;
	ctx.clear_rect(0.0, 0.0, width, height);
	let layout = compute_bar_chart_layout(&options, width, height);
	draw_bar_chart(&ctx, &layout, width)
}

#[cfg(test)]
mod test {
	use super::*;

	fn options(values: &[(&str, f64)]) -> BarChartOptions {
		BarChartOptions {
			series: vec![BarChartSeries {
				color: "gray".to_owned(),
				border_color: None,
				data: values
					.iter()
					.enumerate()
					.map(|(index, (label, y))| BarChartPoint {
						label: label.to_string(),
						y: Some(*y),
						color: Some(format!("color-{}", index)),
						border_color: None,
					})
					.collect(),
				title: None,
			}],
			title: Some("Confidence".to_owned()),
			x_axis_label_rotation: Some(45.0),
			y_axis_grid_line_interval: Some(20.0),
			y_axis_label_suffix: Some("%".to_owned()),
			y_max: Some(100.0),
			y_min: Some(0.0),
		}
	}

	#[test]
	fn test_one_bar_per_point_in_order() {
		let options = options(&[("Lights", 70.0), ("Watch", 20.0), ("TV", 10.0)]);
		let layout = compute_bar_chart_layout(&options, 600.0, 400.0);
		let labels: Vec<_> = layout.bars.iter().map(|bar| bar.label.as_str()).collect();
		assert_eq!(labels, vec!["Lights", "Watch", "TV"]);
		let colors: Vec<_> = layout.bars.iter().map(|bar| bar.color.as_str()).collect();
		assert_eq!(colors, vec!["color-0", "color-1", "color-2"]);
		assert!(layout.bars[0].rect.h > layout.bars[1].rect.h);
		assert!(layout.bars[0].rect.x < layout.bars[1].rect.x);
		assert_eq!(layout.bars[0].border_color, "color-0");
	}

	#[test]
	fn test_values_clamped_to_axis() {
		let options = options(&[("Over", 150.0), ("Under", -5.0), ("Full", 100.0)]);
		let layout = compute_bar_chart_layout(&options, 600.0, 400.0);
		let chart_box = layout.chart_box;
		assert_eq!(layout.bars[0].value, 100.0);
		assert_eq!(layout.bars[0].rect.y, chart_box.y);
		assert!((layout.bars[0].rect.h - chart_box.h).abs() < 1e-9);
		assert_eq!(layout.bars[1].value, 0.0);
		assert_eq!(layout.bars[1].rect.h, 0.0);
		assert_eq!(layout.bars[2].rect.y, layout.bars[0].rect.y);
		assert_eq!(layout.bars[2].rect.h, layout.bars[0].rect.h);
	}

	#[test]
	fn test_grid_lines() {
		let options = options(&[("Lights", 50.0)]);
		let layout = compute_bar_chart_layout(&options, 600.0, 400.0);
		let labels: Vec<_> = layout
			.y_axis_grid_lines
			.iter()
			.map(|line| line.label.as_str())
			.collect();
		assert_eq!(labels, vec!["0%", "20%", "40%", "60%", "80%", "100%"]);
		let first = &layout.y_axis_grid_lines[0];
		let last = &layout.y_axis_grid_lines[5];
		assert_eq!(first.y, layout.chart_box.y + layout.chart_box.h);
		assert_eq!(last.y, layout.chart_box.y);
	}

	#[test]
	fn test_empty_chart() {
		let mut options = options(&[]);
		options.y_max = None;
		options.y_min = None;
		let layout = compute_bar_chart_layout(&options, 600.0, 400.0);
		assert!(layout.bars.is_empty());
		assert!(layout.x_axis_labels.is_empty());
	}
}
