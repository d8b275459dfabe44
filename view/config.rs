use crate::error::Error;
use serde::Deserialize;
use std::time::Duration;

/// Runtime settings for the client. Every field has a default, so an absent or partial `data-config` attribute is fine.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
	pub endpoints: Endpoints,
	pub elements: ElementIds,
	/// Fields checked by `validate_form`.
	pub required_fields: Vec<String>,
	/// The sample data key that carries the true category rather than a feature value.
	pub ground_truth_key: String,
	pub alert_timeout_ms: u64,
	pub settle_delay_ms: u64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Endpoints {
	pub predict: String,
	pub sample_data: String,
	pub dataset_info: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ElementIds {
	pub form: String,
	pub results: String,
	pub prediction_result: String,
	pub loading: String,
	pub chart: String,
	/// The fixed container alerts are stacked in. It is created on first use.
	pub alerts: String,
}

impl Default for ClientConfig {
	fn default() -> ClientConfig {
		ClientConfig {
			endpoints: Endpoints::default(),
			elements: ElementIds::default(),
			required_fields: vec!["bytes".to_owned(), "packets".to_owned(), "duration".to_owned()],
			ground_truth_key: "actual_category".to_owned(),
			alert_timeout_ms: 5000,
			settle_delay_ms: 100,
		}
	}
}

impl Default for Endpoints {
	fn default() -> Endpoints {
		Endpoints {
			predict: "/predict".to_owned(),
			sample_data: "/sample_data".to_owned(),
			dataset_info: "/dataset_info".to_owned(),
		}
	}
}

impl Default for ElementIds {
	fn default() -> ElementIds {
		ElementIds {
			form: "predictionForm".to_owned(),
			results: "results".to_owned(),
			prediction_result: "predictionResult".to_owned(),
			loading: "loadingModal".to_owned(),
			chart: "confidenceChart".to_owned(),
			alerts: "alertStack".to_owned(),
		}
	}
}

impl ClientConfig {
	pub fn from_json(json: &str) -> Result<ClientConfig, Error> {
		serde_json::from_str(json).map_err(|error| Error::Config {
			message: error.to_string(),
		})
	}

	pub fn alert_timeout(&self) -> Duration {
		Duration::from_millis(self.alert_timeout_ms)
	}

	pub fn settle_delay(&self) -> Duration {
		Duration::from_millis(self.settle_delay_ms)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_partial_config() {
		let config = ClientConfig::from_json(
			r#"{"endpoints":{"predict":"/api/predict"},"alert_timeout_ms":2000}"#,
		)
		.unwrap();
		assert_eq!(config.endpoints.predict, "/api/predict");
		assert_eq!(config.endpoints.sample_data, "/sample_data");
		assert_eq!(config.elements.chart, "confidenceChart");
		assert_eq!(config.elements.alerts, "alertStack");
		assert_eq!(config.alert_timeout(), Duration::from_millis(2000));
		assert_eq!(config.settle_delay(), Duration::from_millis(100));
		assert_eq!(ClientConfig::from_json("{}").unwrap(), ClientConfig::default());
	}

	#[test]
	fn test_invalid_config() {
		let error = ClientConfig::from_json(r#"{"alert_timeout_ms":"soon"}"#).unwrap_err();
		assert!(error.to_string().starts_with("Invalid configuration: "));
	}
}
