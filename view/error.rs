use derive_more::{Display, Error};

/// Every failure the controller can surface. The display text is exactly what the user sees in the alert.
#[derive(Clone, Debug, Display, Error, PartialEq)]
pub enum Error {
	#[display(fmt = "Network error: {}", message)]
	Network { message: String },
	#[display(fmt = "Prediction failed: {}", message)]
	Prediction { message: String },
	#[display(fmt = "Failed to load sample data: {}", message)]
	SampleData { message: String },
	#[display(fmt = "Failed to load dataset info: {}", message)]
	DatasetInfo { message: String },
	#[display(fmt = "Malformed response: {}", message)]
	MalformedResponse { message: String },
	#[display(fmt = "Failed to encode form: {}", message)]
	Encode { message: String },
	#[display(fmt = "Invalid configuration: {}", message)]
	Config { message: String },
}

impl Error {
	pub fn malformed(message: impl Into<String>) -> Error {
		Error::MalformedResponse {
			message: message.into(),
		}
	}

	pub fn network(message: impl Into<String>) -> Error {
		Error::Network {
			message: message.into(),
		}
	}
}

#[test]
fn test_display() {
	assert_eq!(
		Error::Prediction {
			message: "bad input".to_owned()
		}
		.to_string(),
		"Prediction failed: bad input"
	);
	assert_eq!(
		Error::network("Failed to fetch").to_string(),
		"Network error: Failed to fetch"
	);
	assert_eq!(
		Error::malformed("missing sorted_confidence").to_string(),
		"Malformed response: missing sorted_confidence"
	);
}
