use crate::error::Error;

/// The form fields sent to the prediction endpoint, in document order. Empty values are sent as `0`.
#[derive(Clone, Debug, PartialEq)]
pub struct FormPayload {
	fields: Vec<(String, String)>,
}

impl FormPayload {
	pub fn from_fields<I, K, V>(fields: I) -> FormPayload
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let fields = fields
			.into_iter()
			.map(|(name, value)| {
				let value = value.into();
				let value = if value.is_empty() {
					"0".to_owned()
				} else {
					value
				};
				(name.into(), value)
			})
			.collect();
		FormPayload { fields }
	}

	pub fn fields(&self) -> &[(String, String)] {
		&self.fields
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.fields
			.iter()
			.find(|(field_name, _)| field_name == name)
			.map(|(_, value)| value.as_str())
	}

	pub fn to_urlencoded(&self) -> Result<String, Error> {
		serde_urlencoded::to_string(&self.fields).map_err(|error| Error::Encode {
			message: error.to_string(),
		})
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_empty_values_become_zero() {
		let payload = FormPayload::from_fields(vec![
			("bytes", ""),
			("packets", "12"),
			("protocol", "tcp udp"),
		]);
		assert_eq!(payload.get("bytes"), Some("0"));
		assert_eq!(payload.get("missing"), None);
		assert_eq!(
			payload.to_urlencoded().unwrap(),
			"bytes=0&packets=12&protocol=tcp+udp"
		);
	}

	#[test]
	fn test_whitespace_is_not_empty() {
		let payload = FormPayload::from_fields(vec![("duration", " ")]);
		assert_eq!(payload.get("duration"), Some(" "));
	}
}
