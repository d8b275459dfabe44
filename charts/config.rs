pub struct ChartConfig {
	pub axis_color: &'static str,
	pub bar_border_width: f64,
	pub bar_radius: f64,
	pub bottom_padding: f64,
	pub font: &'static str,
	pub font_size: f64,
	pub grid_line_color: &'static str,
	pub group_gap: f64,
	pub label_color: &'static str,
	pub label_padding: f64,
	pub left_padding: f64,
	pub right_padding: f64,
	pub title_font: &'static str,
	pub title_font_size: f64,
	pub top_padding: f64,
	pub y_axis_labels_width: f64,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
	axis_color: "#bbb",
	bar_border_width: 2.0,
	bar_radius: 8.0,
	bottom_padding: 8.0,
	font: "12px sans-serif",
	font_size: 12.0,
	grid_line_color: "#eee",
	group_gap: 0.2,
	label_color: "#666",
	label_padding: 8.0,
	left_padding: 8.0,
	right_padding: 8.0,
	title_font: "bold 16px sans-serif",
	title_font_size: 16.0,
	top_padding: 8.0,
	y_axis_labels_width: 40.0,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteColor {
	pub fill: &'static str,
	pub border: &'static str,
}

pub const CHART_PALETTE: [PaletteColor; 9] = [
	PaletteColor {
		fill: "rgba(102, 126, 234, 0.8)",
		border: "rgba(102, 126, 234, 1)",
	},
	PaletteColor {
		fill: "rgba(118, 75, 162, 0.8)",
		border: "rgba(118, 75, 162, 1)",
	},
	PaletteColor {
		fill: "rgba(240, 147, 251, 0.8)",
		border: "rgba(240, 147, 251, 1)",
	},
	PaletteColor {
		fill: "rgba(245, 87, 108, 0.8)",
		border: "rgba(245, 87, 108, 1)",
	},
	PaletteColor {
		fill: "rgba(255, 193, 7, 0.8)",
		border: "rgba(255, 193, 7, 1)",
	},
	PaletteColor {
		fill: "rgba(13, 202, 240, 0.8)",
		border: "rgba(13, 202, 240, 1)",
	},
	PaletteColor {
		fill: "rgba(25, 135, 84, 0.8)",
		border: "rgba(25, 135, 84, 1)",
	},
	PaletteColor {
		fill: "rgba(220, 53, 69, 0.8)",
		border: "rgba(220, 53, 69, 1)",
	},
	PaletteColor {
		fill: "rgba(111, 66, 193, 0.8)",
		border: "rgba(111, 66, 193, 1)",
	},
];

/// Colors repeat once the palette is exhausted.
pub fn palette_color(index: usize) -> PaletteColor {
	CHART_PALETTE[index % CHART_PALETTE.len()]
}

#[test]
fn test_palette_color_cycles() {
	assert_eq!(palette_color(0), palette_color(9));
	assert_eq!(palette_color(4), palette_color(13));
	assert_ne!(palette_color(0), palette_color(1));
}
