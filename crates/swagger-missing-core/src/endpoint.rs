//! Endpoints and their source

use crate::view::SchemaView;
use http::Method;
use std::fmt;
use std::sync::Arc;

/// A `(path, method, view)` triple supplied by the host router
#[derive(Clone)]
pub struct Endpoint {
	pub path: String,
	pub method: Method,
	pub view: Arc<dyn SchemaView>,
}

impl Endpoint {
	pub fn new(path: impl Into<String>, method: Method, view: Arc<dyn SchemaView>) -> Self {
		Self {
			path: path.into(),
			method,
			view,
		}
	}
}

impl fmt::Debug for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Endpoint")
			.field("path", &self.path)
			.field("method", &self.method)
			.finish_non_exhaustive()
	}
}

/// Yields the endpoints of one generation pass
pub trait Router {
	fn endpoints(&self) -> Vec<Endpoint>;
}

impl Router for Vec<Endpoint> {
	fn endpoints(&self) -> Vec<Endpoint> {
		self.clone()
	}
}

impl Router for [Endpoint] {
	fn endpoints(&self) -> Vec<Endpoint> {
		self.to_vec()
	}
}
