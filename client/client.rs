use anyhow::{anyhow, Context, Result};
use iotid_view::{ClientConfig, Controller};
use std::rc::Rc;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::spawn_local;

mod dom;
mod events;
mod fetch;
mod log;

use self::dom::DomView;
use self::fetch::FetchTransport;

pub type App = Controller<DomView, FetchTransport>;

#[wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();
	log::init();
	if let Err(error) = initialize() {
		tracing::error!(error = %format!("{:#}", error), "failed to start");
	}
}

/// Attach every listener and start loading dataset statistics in the background.
fn initialize() -> Result<()> {
	let window = web_sys::window().context("no window")?;
	let document = window.document().context("no document")?;
	let config = read_config(&document)?;
	let view = Rc::new(DomView::new(
		window,
		document.clone(),
		config.elements.clone(),
	));
	let app = Rc::new(Controller::new(config, view, FetchTransport::default()));
	events::bind(&app, &document).map_err(|error| anyhow!("failed to bind events: {:?}", error))?;
	spawn_local(app.initialize());
	Ok(())
}

/// The config is the JSON in the `data-config` attribute of the prediction form. Without one, the defaults apply.
fn read_config(document: &web_sys::Document) -> Result<ClientConfig> {
	let element = document
		.query_selector("form[data-config]")
		.map_err(|error| anyhow!("{:?}", error))?;
	let config = element
		.and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
		.and_then(|element| element.dataset().get("config"));
	match config {
		Some(config) => Ok(ClientConfig::from_json(&config)?),
		None => Ok(ClientConfig::default()),
	}
}
