use crate::error::Error;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Summary statistics of the training dataset. Every field is optional on the wire.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DatasetInfo {
	pub total_samples: Option<u64>,
	pub total_features: Option<u64>,
	#[serde(default)]
	pub device_categories: Vec<String>,
	#[serde(default)]
	pub category_counts: BTreeMap<String, u64>,
}

#[derive(Deserialize)]
struct DatasetInfoResponse {
	error: Option<String>,
	#[serde(flatten)]
	info: DatasetInfo,
}

pub fn parse_dataset_info(body: &str) -> Result<DatasetInfo, Error> {
	let response: DatasetInfoResponse =
		serde_json::from_str(body).map_err(|error| Error::malformed(error.to_string()))?;
	match response.error {
		Some(message) => Err(Error::DatasetInfo { message }),
		None => Ok(response.info),
	}
}
