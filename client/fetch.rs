use iotid_view::transport::{ResponseFuture, Transport};
use iotid_view::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Requests go to the page's own origin with `window.fetch`.
#[derive(Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
	fn get(&self, path: &str) -> ResponseFuture {
		let path = path.to_owned();
		Box::pin(async move { fetch_text(&path, "GET", None).await })
	}

	fn post_form(&self, path: &str, body: String) -> ResponseFuture {
		let path = path.to_owned();
		Box::pin(async move { fetch_text(&path, "POST", Some(body)).await })
	}
}

async fn fetch_text(path: &str, method: &str, body: Option<String>) -> Result<String, Error> {
	let mut init = RequestInit::new();
	init.method(method);
	if let Some(body) = body {
		let headers = Headers::new().map_err(network_error)?;
		headers
			.set("Content-Type", "application/x-www-form-urlencoded")
			.map_err(network_error)?;
		init.headers(&headers);
		init.body(Some(&JsValue::from_str(&body)));
	}
	let request = Request::new_with_str_and_init(path, &init).map_err(network_error)?;
	let window = web_sys::window().ok_or_else(|| Error::network("no window"))?;
	let response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(network_error)?;
	let response = response
		.dyn_into::<Response>()
		.map_err(network_error)?;
	tracing::debug!(path, status = response.status(), "response");
	let text = JsFuture::from(response.text().map_err(network_error)?)
		.await
		.map_err(network_error)?;
	text.as_string()
		.ok_or_else(|| Error::malformed("response body is not text"))
}

fn network_error(value: JsValue) -> Error {
	let message = value
		.dyn_ref::<js_sys::Error>()
		.map(|error| String::from(error.message()))
		.or_else(|| value.as_string())
		.unwrap_or_else(|| format!("{:?}", value));
	Error::network(message)
}
