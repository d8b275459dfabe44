use crate::error::Error;
use futures::future::LocalBoxFuture;
use std::rc::Rc;

pub type ResponseFuture = LocalBoxFuture<'static, Result<String, Error>>;

/// Issues requests to the prediction server and resolves to the response body. Status codes are not inspected, so an error status with a JSON body is handled like any other response.
pub trait Transport {
	fn get(&self, path: &str) -> ResponseFuture;
	fn post_form(&self, path: &str, body: String) -> ResponseFuture;
}

impl<T> Transport for Rc<T>
where
	T: Transport + ?Sized,
{
	fn get(&self, path: &str) -> ResponseFuture {
		(**self).get(path)
	}

	fn post_form(&self, path: &str, body: String) -> ResponseFuture {
		(**self).post_form(path, body)
	}
}
