/// Icon shown for labels outside the known set.
pub const DEFAULT_DEVICE_ICON: &str = "fas fa-microchip";

/// Font Awesome classes for the icon shown next to a predicted label.
pub fn device_icon(label: &str) -> &'static str {
	match label {
		"baby_monitor" => "fas fa-baby",
		"lights" => "fas fa-lightbulb",
		"motion_sensor" => "fas fa-eye",
		"security_camera" => "fas fa-video",
		"smoke_detector" => "fas fa-fire",
		"socket" => "fas fa-plug",
		"thermostat" => "fas fa-thermometer-half",
		"TV" => "fas fa-tv",
		"watch" => "fas fa-clock",
		_ => DEFAULT_DEVICE_ICON,
	}
}

/// Turn a raw label like `security_camera` into `Security Camera`. Underscores become spaces and the first character of each word is uppercased. Other characters are left alone, so `TV` stays `TV`.
pub fn format_device_name(label: &str) -> String {
	let mut name = String::with_capacity(label.len());
	let mut at_word_start = true;
	for c in label.chars() {
		let c = if c == '_' { ' ' } else { c };
		let is_word_char = c.is_ascii_alphanumeric() || c == '_';
		if at_word_start && is_word_char {
			name.push(c.to_ascii_uppercase());
		} else {
			name.push(c);
		}
		at_word_start = !is_word_char;
	}
	name
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_format_device_name() {
		assert_eq!(format_device_name("security_camera"), "Security Camera");
		assert_eq!(format_device_name("baby_monitor"), "Baby Monitor");
		assert_eq!(format_device_name("TV"), "TV");
		assert_eq!(format_device_name("lights"), "Lights");
		assert_eq!(format_device_name("smoke-detector"), "Smoke-Detector");
		assert_eq!(format_device_name(""), "");
	}

	#[test]
	fn test_device_icon() {
		assert_eq!(device_icon("thermostat"), "fas fa-thermometer-half");
		assert_eq!(device_icon("TV"), "fas fa-tv");
		assert_eq!(device_icon("tv"), DEFAULT_DEVICE_ICON);
		assert_eq!(device_icon("fridge"), DEFAULT_DEVICE_ICON);
	}
}
