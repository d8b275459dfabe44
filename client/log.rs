use std::fmt::{self, Write};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Route tracing events to the browser console. Debug builds also log debug events.
pub fn init() {
	let level = if cfg!(debug_assertions) {
		LevelFilter::DEBUG
	} else {
		LevelFilter::INFO
	};
	let subscriber = tracing_subscriber::registry()
		.with(level)
		.with(ConsoleLayer);
	if tracing::subscriber::set_global_default(subscriber).is_err() {
		console::warn_1(&JsValue::from_str("tracing subscriber already set"));
	}
}

struct ConsoleLayer;

impl<S> Layer<S> for ConsoleLayer
where
	S: Subscriber,
{
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let metadata = event.metadata();
		let mut visitor = EventVisitor::default();
		event.record(&mut visitor);
		let line = JsValue::from_str(&format_record(
			*metadata.level(),
			metadata.target(),
			&visitor,
		));
		match *metadata.level() {
			Level::ERROR => console::error_1(&line),
			Level::WARN => console::warn_1(&line),
			Level::INFO => console::info_1(&line),
			_ => console::debug_1(&line),
		}
	}
}

#[derive(Default)]
struct EventVisitor {
	message: String,
	fields: Vec<(String, String)>,
}

impl Visit for EventVisitor {
	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		let value = format!("{:?}", value);
		self.record_str(field, strip_quotes(&value));
	}

	fn record_str(&mut self, field: &Field, value: &str) {
		if field.name() == "message" {
			self.message = value.to_owned();
		} else {
			self.fields.push((field.name().to_owned(), value.to_owned()));
		}
	}
}

fn strip_quotes(value: &str) -> &str {
	if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
		&value[1..value.len() - 1]
	} else {
		value
	}
}

fn format_record(level: Level, target: &str, visitor: &EventVisitor) -> String {
	let mut line = format!("{} {}: {}", level, target, visitor.message);
	for (name, value) in visitor.fields.iter() {
		write!(line, " {}={}", name, value).ok();
	}
	line
}

#[test]
fn test_format_record() {
	let visitor = EventVisitor {
		message: "alert".to_owned(),
		fields: vec![
			("level".to_owned(), "danger".to_owned()),
			("text".to_owned(), "Network error: offline".to_owned()),
		],
	};
	assert_eq!(
		format_record(Level::INFO, "iotid_view::controller", &visitor),
		"INFO iotid_view::controller: alert level=danger text=Network error: offline"
	);
	assert_eq!(strip_quotes("\"TV\""), "TV");
	assert_eq!(strip_quotes("Some(3)"), "Some(3)");
}
