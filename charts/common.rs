use wasm_bindgen::JsValue;

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub h: f64,
	pub w: f64,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
	pub label: String,
	pub value: f64,
}

/// Grid lines from `min` to `max` inclusive, every `interval`.
pub fn compute_grid_lines(min: f64, max: f64, interval: f64, suffix: &str) -> Vec<GridLine> {
	if !(interval > 0.0) || !(max >= min) {
		return Vec::new();
	}
	let count = ((max - min) / interval + 1e-9).floor() as usize;
	(0..=count)
		.map(|index| {
			let value = min + interval * index as f64;
			GridLine {
				label: format!("{}{}", format_number(value), suffix),
				value,
			}
		})
		.collect()
}

pub fn format_number(value: f64) -> String {
	if (value - value.round()).abs() < 1e-9 {
		format!("{:.0}", value)
	} else {
		format!("{}", value)
	}
}

/// Rough text width for layout decisions made before a canvas exists.
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
	text.chars().count() as f64 * font_size * 0.6
}

pub struct DrawRoundedRectOptions<'a> {
	pub ctx: &'a web_sys::CanvasRenderingContext2d,
	pub fill_color: &'a str,
	pub radius: f64,
	pub rect: Rect,
	pub stroke_color: &'a str,
	pub stroke_width: f64,
}

pub fn draw_rounded_rect(options: DrawRoundedRectOptions) -> Result<(), JsValue> {
	let DrawRoundedRectOptions {
		ctx,
		fill_color,
		radius,
		rect,
		stroke_color,
		stroke_width,
	} = options;
	let Rect { x, y, w, h } = rect;
	if w <= 0.0 || h <= 0.0 {
		return Ok(());
	}
	let radius = radius.min(w / 2.0).min(h / 2.0).max(0.0);
	ctx.save();
	ctx.set_fill_style(&JsValue::from_str(fill_color));
	ctx.set_stroke_style(&JsValue::from_str(stroke_color));
	ctx.set_line_width(stroke_width);
	ctx.begin_path();
	ctx.move_to(x + radius, y);
	ctx.line_to(x + w - radius, y);
	ctx.arc_to(x + w, y, x + w, y + radius, radius)?;
	ctx.line_to(x + w, y + h - radius);
	ctx.arc_to(x + w, y + h, x + w - radius, y + h, radius)?;
	ctx.line_to(x + radius, y + h);
	ctx.arc_to(x, y + h, x, y + h - radius, radius)?;
	ctx.line_to(x, y + radius);
	ctx.arc_to(x, y, x + radius, y, radius)?;
	ctx.close_path();
	ctx.fill();
	ctx.stroke();
	ctx.restore();
	Ok(())
}
