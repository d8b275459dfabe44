use crate::error::Error;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// The body returned by the prediction endpoint, before validation.
#[derive(Debug, Deserialize)]
pub struct PredictionResponse {
	#[serde(default)]
	pub success: bool,
	pub predicted_class: Option<String>,
	pub confidence_scores: Option<BTreeMap<String, f64>>,
	pub sorted_confidence: Option<Vec<(String, f64)>>,
	pub error: Option<String>,
}

/// A successful, validated prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
	pub predicted_class: String,
	pub confidence_scores: BTreeMap<String, f64>,
	/// Every entry of `confidence_scores`, highest confidence first.
	pub sorted_confidence: Vec<(String, f64)>,
}

impl PredictionResult {
	/// The confidence of the predicted class.
	pub fn confidence(&self) -> f64 {
		self.confidence_scores
			.get(&self.predicted_class)
			.copied()
			.unwrap_or(0.0)
	}
}

pub fn parse_prediction(body: &str) -> Result<PredictionResult, Error> {
	let response: PredictionResponse =
		serde_json::from_str(body).map_err(|error| Error::malformed(error.to_string()))?;
	PredictionResult::from_response(response)
}

impl PredictionResult {
	pub fn from_response(response: PredictionResponse) -> Result<PredictionResult, Error> {
		let PredictionResponse {
			success,
			predicted_class,
			confidence_scores,
			sorted_confidence,
			error,
		} = response;
		if !success {
			let message = error
				.filter(|error| !error.is_empty())
				.unwrap_or_else(|| "Unknown error".to_owned());
			return Err(Error::Prediction { message });
		}
		let predicted_class =
			predicted_class.ok_or_else(|| Error::malformed("missing predicted_class"))?;
		let confidence_scores =
			confidence_scores.ok_or_else(|| Error::malformed("missing confidence_scores"))?;
		let sorted_confidence =
			sorted_confidence.ok_or_else(|| Error::malformed("missing sorted_confidence"))?;
		for (label, confidence) in confidence_scores.iter() {
			if !confidence.is_finite() || *confidence < 0.0 {
				return Err(Error::malformed(format!(
					"confidence for {} is not a non-negative number",
					label
				)));
			}
		}
		if !confidence_scores.contains_key(&predicted_class) {
			return Err(Error::malformed(format!(
				"no confidence for predicted class {}",
				predicted_class
			)));
		}
		let mut seen = BTreeSet::new();
		let matches_scores = sorted_confidence.len() == confidence_scores.len()
			&& sorted_confidence.iter().all(|(label, confidence)| {
				seen.insert(label.as_str())
					&& confidence_scores.get(label) == Some(confidence)
			});
		if !matches_scores {
			return Err(Error::malformed(
				"sorted_confidence does not match confidence_scores",
			));
		}
		let descending = sorted_confidence
			.windows(2)
			.all(|pair| pair[0].1 >= pair[1].1);
		if !descending {
			return Err(Error::malformed(
				"sorted_confidence is not in descending order",
			));
		}
		Ok(PredictionResult {
			predicted_class,
			confidence_scores,
			sorted_confidence,
		})
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_parse_success() {
		let result = parse_prediction(
			r#"{
				"success": true,
				"predicted_class": "security_camera",
				"confidence_scores": {"security_camera": 0.81, "TV": 0.19},
				"sorted_confidence": [["security_camera", 0.81], ["TV", 0.19]]
			}"#,
		)
		.unwrap();
		assert_eq!(result.predicted_class, "security_camera");
		assert_eq!(result.confidence(), 0.81);
		assert_eq!(
			result.sorted_confidence,
			vec![
				("security_camera".to_owned(), 0.81),
				("TV".to_owned(), 0.19)
			]
		);
	}

	#[test]
	fn test_server_reported_failure() {
		assert_eq!(
			parse_prediction(r#"{"success": false, "error": "bad input"}"#).unwrap_err(),
			Error::Prediction {
				message: "bad input".to_owned()
			}
		);
		assert_eq!(
			parse_prediction(r#"{"success": false}"#)
				.unwrap_err()
				.to_string(),
			"Prediction failed: Unknown error"
		);
		assert_eq!(
			parse_prediction(r#"{"error": ""}"#).unwrap_err().to_string(),
			"Prediction failed: Unknown error"
		);
	}

	#[test]
	fn test_malformed() {
		let cases = vec![
			("not json", None),
			(r#"{"success": true}"#, Some("missing predicted_class")),
			(
				r#"{"success": true, "predicted_class": "TV", "confidence_scores": {"TV": 1.0}}"#,
				Some("missing sorted_confidence"),
			),
			(
				r#"{"success": true, "predicted_class": "watch", "confidence_scores": {"TV": 1.0}, "sorted_confidence": [["TV", 1.0]]}"#,
				Some("no confidence for predicted class watch"),
			),
			(
				r#"{"success": true, "predicted_class": "TV", "confidence_scores": {"TV": 0.6, "watch": 0.4}, "sorted_confidence": [["TV", 0.6]]}"#,
				Some("sorted_confidence does not match confidence_scores"),
			),
			(
				r#"{"success": true, "predicted_class": "TV", "confidence_scores": {"TV": 0.6, "watch": 0.4}, "sorted_confidence": [["TV", 0.6], ["TV", 0.6]]}"#,
				Some("sorted_confidence does not match confidence_scores"),
			),
			(
				r#"{"success": true, "predicted_class": "TV", "confidence_scores": {"TV": 0.6, "watch": 0.4}, "sorted_confidence": [["watch", 0.4], ["TV", 0.6]]}"#,
				Some("sorted_confidence is not in descending order"),
			),
			(
				r#"{"success": true, "predicted_class": "TV", "confidence_scores": {"TV": -0.1}, "sorted_confidence": [["TV", -0.1]]}"#,
				Some("confidence for TV is not a non-negative number"),
			),
		];
		for (body, message) in cases {
			match parse_prediction(body).unwrap_err() {
				Error::MalformedResponse { message: actual } => {
					if let Some(message) = message {
						assert_eq!(actual, message);
					}
				}
				error => panic!("unexpected error for {}: {}", body, error),
			}
		}
	}
}
