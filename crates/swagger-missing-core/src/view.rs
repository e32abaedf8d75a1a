//! View capabilities consumed during schema generation
//!
//! A [`SchemaView`] exposes each optional capability as an `Option` getter.
//! `None` means the feature is absent and generation proceeds with defaults.

use crate::inspector::LinkInspector;
use crate::link::{LinkField, LinkResponse};
use crate::serializer::Serializer;
use http::Method;
use std::collections::HashMap;

/// Per-view permission check
pub trait PermissionCheck: Send + Sync {
	fn has_permission(&self, path: &str, method: &Method) -> bool;
}

/// A view handler as seen by the schema generator
pub trait SchemaView: Send + Sync {
	/// Leave this view out of the generated schema
	fn is_excluded(&self) -> bool {
		false
	}

	/// Declared action name (`list`, `retrieve`, `create`, ...)
	fn action(&self) -> Option<&str> {
		None
	}

	fn permission(&self) -> Option<&dyn PermissionCheck> {
		None
	}

	fn serializer(&self) -> Option<&dyn Serializer> {
		None
	}

	fn meta(&self) -> Option<&ViewMeta> {
		None
	}

	/// Link construction for this view. The generator's
	/// [`AutoLinkInspector`](crate::AutoLinkInspector) is used when absent.
	fn inspector(&self) -> Option<&dyn LinkInspector> {
		None
	}
}

/// User-declared schema metadata, keyed by action name
///
/// # Example
///
/// ```rust
/// use swagger_missing_core::{FieldLocation, LinkField, LinkResponse, ViewMeta};
///
/// let meta = ViewMeta::new()
///     .field("list", LinkField::new("search", FieldLocation::Query))
///     .response("list", LinkResponse::new(404).description("No pizza today"))
///     .produces("list", ["application/json", "text/csv"]);
///
/// assert_eq!(meta.fields_for("list").len(), 1);
/// assert_eq!(meta.responses_for("list").unwrap()[0].status, 404);
/// assert!(meta.produces_for("create").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ViewMeta {
	pub fields: HashMap<String, Vec<LinkField>>,
	pub responses: HashMap<String, Vec<LinkResponse>>,
	pub produces: HashMap<String, Vec<String>>,
}

impl ViewMeta {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add an extra filter field for an action
	pub fn field(mut self, action: impl Into<String>, field: LinkField) -> Self {
		self.fields.entry(action.into()).or_default().push(field);
		self
	}

	/// Declare a response for an action
	pub fn response(mut self, action: impl Into<String>, response: LinkResponse) -> Self {
		self.responses.entry(action.into()).or_default().push(response);
		self
	}

	/// Declare the content types an action produces
	pub fn produces<I, S>(mut self, action: impl Into<String>, content_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.produces.insert(
			action.into(),
			content_types.into_iter().map(Into::into).collect(),
		);
		self
	}

	pub fn fields_for(&self, action: &str) -> &[LinkField] {
		self.fields.get(action).map(Vec::as_slice).unwrap_or(&[])
	}

	pub fn responses_for(&self, action: &str) -> Option<&[LinkResponse]> {
		self.responses.get(action).map(Vec::as_slice)
	}

	pub fn produces_for(&self, action: &str) -> Option<&[String]> {
		self.produces.get(action).map(Vec::as_slice)
	}
}
