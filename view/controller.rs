use crate::alert::{Alert, AlertId, AlertIds, Level};
use crate::config::ClientConfig;
use crate::dataset::{parse_dataset_info, DatasetInfo};
use crate::device::format_device_name;
use crate::error::Error;
use crate::fence::RequestFence;
use crate::loading::LoadingIndicator;
use crate::payload::FormPayload;
use crate::prediction::{parse_prediction, PredictionResult};
use crate::result::render_prediction_result;
use crate::sample::{parse_sample_data, SampleData};
use crate::shortcut::Shortcut;
use crate::transport::Transport;
use crate::view::View;
use futures::future::{FutureExt, LocalBoxFuture};
use std::rc::Rc;
use tracing::{debug, error, info, warn};

/// Drives the prediction page. Async operations take `self: Rc<Self>` so the futures they return can be spawned.
pub struct Controller<V, T> {
	config: ClientConfig,
	view: Rc<V>,
	transport: T,
	loading: LoadingIndicator,
	alert_ids: AlertIds,
	prediction_fence: RequestFence,
	sample_fence: RequestFence,
}

impl<V, T> Controller<V, T>
where
	V: View + 'static,
	T: Transport + 'static,
{
	pub fn new(config: ClientConfig, view: Rc<V>, transport: T) -> Controller<V, T> {
		let loading = LoadingIndicator::new({
			let view = view.clone();
			move |visible| view.set_loading_visible(visible)
		});
		Controller {
			config,
			view,
			transport,
			loading,
			alert_ids: AlertIds::default(),
			prediction_fence: RequestFence::default(),
			sample_fence: RequestFence::default(),
		}
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	pub fn loading(&self) -> &LoadingIndicator {
		&self.loading
	}

	/// Returns the background dataset fetch for the caller to spawn once the page's listeners are attached.
	pub fn initialize(self: &Rc<Self>) -> LocalBoxFuture<'static, ()> {
		info!(
			predict = %self.config.endpoints.predict,
			sample_data = %self.config.endpoints.sample_data,
			"initializing"
		);
		let controller = self.clone();
		async move {
			controller.load_dataset_info().await;
		}
		.boxed_local()
	}

	/// Fetch dataset statistics. They are only logged, and failures never reach the user.
	pub async fn load_dataset_info(self: Rc<Self>) -> Option<DatasetInfo> {
		match self.request_dataset_info().await {
			Ok(info) => {
				info!(
					total_samples = ?info.total_samples,
					total_features = ?info.total_features,
					device_categories = ?info.device_categories,
					"dataset loaded"
				);
				Some(info)
			}
			Err(error) => {
				error!(%error, "failed to load dataset info");
				None
			}
		}
	}

	async fn request_dataset_info(&self) -> Result<DatasetInfo, Error> {
		let body = self.transport.get(&self.config.endpoints.dataset_info).await?;
		parse_dataset_info(&body)
	}

	pub async fn submit_prediction(self: Rc<Self>) {
		let ticket = self.prediction_fence.issue();
		let payload = FormPayload::from_fields(self.view.form_fields());
		debug!(fields = payload.fields().len(), "submitting prediction");
		let loading = self.loading.show();
		let outcome = self.request_prediction(&payload).await;
		drop(loading);
		self.schedule_settle();
		if !self.prediction_fence.is_current(ticket) {
			debug!("dropping stale prediction response");
			return;
		}
		match outcome {
			Ok(result) => self.display_result(&result),
			Err(error) => {
				warn!(%error, "prediction failed");
				self.show_error(error.to_string());
			}
		}
	}

	async fn request_prediction(&self, payload: &FormPayload) -> Result<PredictionResult, Error> {
		let body = payload.to_urlencoded()?;
		let response = self
			.transport
			.post_form(&self.config.endpoints.predict, body)
			.await?;
		parse_prediction(&response)
	}

	pub fn display_result(&self, result: &PredictionResult) {
		info!(
			predicted_class = %result.predicted_class,
			confidence = result.confidence(),
			"prediction"
		);
		let elements = &self.config.elements;
		self.view
			.set_result_html(render_prediction_result(result, &elements.chart));
		self.view.set_results_visible(true);
		self.view.hydrate_chart(&elements.chart);
		self.view.scroll_into_view(&elements.results);
	}

	pub async fn load_sample_data(self: Rc<Self>) {
		let ticket = self.sample_fence.issue();
		let loading = self.loading.show();
		let outcome = self.request_sample_data().await;
		drop(loading);
		self.schedule_settle();
		if !self.sample_fence.is_current(ticket) {
			debug!("dropping stale sample data response");
			return;
		}
		match outcome {
			Ok(sample) => {
				self.populate_form(&sample);
				if let Some(category) = sample.actual_category.as_ref() {
					self.show_info(format!("Sample data from: {}", format_device_name(category)));
				}
				self.show_success("Sample data loaded successfully!");
			}
			Err(error) => {
				warn!(%error, "failed to load sample data");
				self.show_error(error.to_string());
			}
		}
	}

	async fn request_sample_data(&self) -> Result<SampleData, Error> {
		let body = self.transport.get(&self.config.endpoints.sample_data).await?;
		parse_sample_data(&body, &self.config.ground_truth_key)
	}

	/// Keys without a matching field are skipped.
	pub fn populate_form(&self, sample: &SampleData) {
		for (key, value) in sample.fields.iter() {
			if !self.view.set_field_value(key, value) {
				debug!(field = %key, "no form field for sample key");
			}
		}
	}

	/// Also makes any in-flight prediction stale, so its response cannot bring back the results.
	pub fn clear_form(&self) {
		self.prediction_fence.invalidate();
		self.view.clear_form();
		self.view.set_results_visible(false);
		self.show_success("Form cleared successfully!");
	}

	/// Mark each required field that is empty or whitespace as invalid. Required fields missing from the page are skipped. Returns whether every present one was filled.
	pub fn validate_form(&self) -> bool {
		let mut valid = true;
		for field in self.config.required_fields.iter() {
			let value = match self.view.field_value(field) {
				Some(value) => value,
				None => continue,
			};
			let filled = !value.trim().is_empty();
			self.view.set_field_invalid(field, !filled);
			valid &= filled;
		}
		valid
	}

	/// Editing a field clears its invalid mark.
	pub fn handle_input(&self, field_id: &str) {
		self.view.set_field_invalid(field_id, false);
	}

	/// Clearing happens immediately. Submitting returns the request future for the caller to spawn.
	pub fn handle_shortcut(self: &Rc<Self>, shortcut: Shortcut) -> Option<LocalBoxFuture<'static, ()>> {
		debug!(?shortcut, "shortcut");
		match shortcut {
			Shortcut::Submit => Some(self.clone().submit_prediction().boxed_local()),
			Shortcut::Clear => {
				self.clear_form();
				None
			}
		}
	}

	pub fn scroll_to_section(&self, id: &str) -> bool {
		let found = self.view.scroll_into_view(id);
		if !found {
			debug!(id, "no section to scroll to");
		}
		found
	}

	/// Show a dismissible alert that removes itself after the configured timeout.
	pub fn alert(&self, level: Level, message: impl Into<String>) -> AlertId {
		let alert = Alert {
			id: self.alert_ids.next(),
			level,
			message: message.into(),
		};
		info!(level = level.as_str(), text = %alert.message, "alert");
		self.view.append_alert(&alert);
		let id = alert.id;
		let view = self.view.clone();
		self.view.schedule(
			self.config.alert_timeout(),
			Box::new(move || {
				view.remove_alert(id);
			}),
		);
		id
	}

	pub fn show_error(&self, message: impl Into<String>) -> AlertId {
		self.alert(Level::Danger, message)
	}

	pub fn show_success(&self, message: impl Into<String>) -> AlertId {
		self.alert(Level::Success, message)
	}

	pub fn show_info(&self, message: impl Into<String>) -> AlertId {
		self.alert(Level::Info, message)
	}

	pub fn dismiss_alert(&self, id: AlertId) -> bool {
		self.view.remove_alert(id)
	}

	fn schedule_settle(&self) {
		let loading = self.loading.clone();
		self.view
			.schedule(self.config.settle_delay(), Box::new(move || loading.settle()));
	}
}
