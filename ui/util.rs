pub fn format_percent(value: f64) -> String {
	format_percent_with_precision(value, 2)
}

pub fn format_percent_with_precision(value: f64, precision: usize) -> String {
	format!("{:.1$}%", value * 100.0, precision)
}

/// Clamp a percentage to [0, 100]. NaN becomes 0.
pub fn clamp_percent(value: f64) -> f64 {
	if value.is_nan() {
		0.0
	} else {
		value.max(0.0).min(100.0)
	}
}

#[test]
fn test_format_percent() {
	assert_eq!(format_percent(0.0), "0.00%");
	assert_eq!(format_percent(0.424292), "42.43%");
	assert_eq!(format_percent_with_precision(0.424292, 3), "42.429%");
	assert_eq!(format_percent(1.0), "100.00%");
}

#[test]
fn test_clamp_percent() {
	assert_eq!(clamp_percent(-3.0), 0.0);
	assert_eq!(clamp_percent(42.5), 42.5);
	assert_eq!(clamp_percent(250.0), 100.0);
	assert_eq!(clamp_percent(f64::NAN), 0.0);
}
