use crate::error::Error;
use serde_json::Value;

/// A sample row from the dataset. `fields` maps form field ids to the text to put in them.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleData {
	pub fields: Vec<(String, String)>,
	pub actual_category: Option<String>,
}

pub fn parse_sample_data(body: &str, ground_truth_key: &str) -> Result<SampleData, Error> {
	let value: Value =
		serde_json::from_str(body).map_err(|error| Error::malformed(error.to_string()))?;
	let object = match value {
		Value::Object(object) => object,
		_ => return Err(Error::malformed("sample data is not an object")),
	};
	if let Some(error) = object.get("error").filter(|error| is_truthy(error)) {
		return Err(Error::SampleData {
			message: field_text(error),
		});
	}
	let actual_category = object
		.get(ground_truth_key)
		.filter(|value| is_truthy(value))
		.map(field_text);
	let fields = object
		.iter()
		.filter(|(key, _)| key.as_str() != ground_truth_key && key.as_str() != "error")
		.map(|(key, value)| (key.clone(), field_text(value)))
		.collect();
	Ok(SampleData {
		fields,
		actual_category,
	})
}

/// The text a form control should show for a JSON value. Numbers use their shortest decimal form, strings are used as is, and null becomes empty.
pub fn field_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(value) => value.clone(),
		Value::Bool(value) => value.to_string(),
		Value::Number(number) => match number.as_f64() {
			Some(float) if number.is_f64() => format!("{}", float),
			_ => number.to_string(),
		},
		value => value.to_string(),
	}
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(value) => *value,
		Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
		Value::String(value) => !value.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_parse_sample_data() {
		let sample = parse_sample_data(
			r#"{"bytes": 1500, "duration": 2.5, "protocol": "tcp", "is_encrypted": true, "note": null, "actual_category": "smoke_detector"}"#,
			"actual_category",
		)
		.unwrap();
		assert_eq!(sample.actual_category.as_deref(), Some("smoke_detector"));
		let field = |name: &str| {
			sample
				.fields
				.iter()
				.find(|(key, _)| key == name)
				.map(|(_, value)| value.as_str())
		};
		assert_eq!(field("bytes"), Some("1500"));
		assert_eq!(field("duration"), Some("2.5"));
		assert_eq!(field("protocol"), Some("tcp"));
		assert_eq!(field("is_encrypted"), Some("true"));
		assert_eq!(field("note"), Some(""));
		assert_eq!(field("actual_category"), None);
	}

	#[test]
	fn test_sample_data_error() {
		assert_eq!(
			parse_sample_data(r#"{"error": "dataset missing"}"#, "actual_category")
				.unwrap_err()
				.to_string(),
			"Failed to load sample data: dataset missing"
		);
		let sample = parse_sample_data(r#"{"error": null, "bytes": 1}"#, "actual_category").unwrap();
		assert_eq!(sample.fields, vec![("bytes".to_owned(), "1".to_owned())]);
		assert_eq!(sample.actual_category, None);
	}

	#[test]
	fn test_not_an_object() {
		assert!(matches!(
			parse_sample_data("[1, 2]", "actual_category"),
			Err(Error::MalformedResponse { .. })
		));
	}

	#[test]
	fn test_field_text() {
		assert_eq!(field_text(&serde_json::json!(0.1)), "0.1");
		assert_eq!(field_text(&serde_json::json!(-3)), "-3");
		assert_eq!(field_text(&serde_json::json!(4.0)), "4");
	}
}
