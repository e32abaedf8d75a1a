//! Link construction
//!
//! Views may supply their own [`LinkInspector`]. Otherwise the generator falls
//! back to [`AutoLinkInspector`], which documents the path variables only.

use crate::link::{FieldLocation, Link, LinkField};
use crate::SchemaResult;
use http::Method;
use utoipa::openapi::schema::{ObjectBuilder, Schema, SchemaType, Type};

/// Builds the base link of a view for a subpath and method
pub trait LinkInspector: Send + Sync {
	fn get_link(&self, subpath: &str, method: &Method, base_url: &str) -> SchemaResult<Link>;
}

/// Default link construction
///
/// The link URL is `base_url` joined with the subpath, and each `{name}`
/// segment becomes a required string path field.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use swagger_missing_core::{AutoLinkInspector, FieldLocation, LinkInspector};
///
/// let link = AutoLinkInspector::new()
///     .get_link("pizza/{id}/", &Method::GET, "/api/")
///     .unwrap();
///
/// assert_eq!(link.url, "/api/pizza/{id}/");
/// assert_eq!(link.fields[0].name, "id");
/// assert_eq!(link.fields[0].location, FieldLocation::Path);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutoLinkInspector {
	description: Option<String>,
}

impl AutoLinkInspector {
	pub fn new() -> Self {
		Self::default()
	}

	/// Description attached to every built link
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Names of the `{variable}` placeholders of a path, in order
	///
	/// A segment may hold several placeholders, as in `{name}.{ext}`.
	pub fn path_variables(path: &str) -> Vec<&str> {
		let mut variables = Vec::new();
		let mut rest = path;
		while let Some(start) = rest.find('{') {
			let Some(len) = rest[start..].find('}') else {
				break;
			};
			let name = &rest[start + 1..start + len];
			if !name.is_empty() {
				variables.push(name);
			}
			rest = &rest[start + len + 1..];
		}
		variables
	}

	fn join_url(base_url: &str, subpath: &str) -> String {
		if base_url.is_empty() {
			return format!("/{}", subpath.trim_start_matches('/'));
		}
		format!(
			"{}/{}",
			base_url.trim_end_matches('/'),
			subpath.trim_start_matches('/')
		)
	}
}

impl LinkInspector for AutoLinkInspector {
	fn get_link(&self, subpath: &str, method: &Method, base_url: &str) -> SchemaResult<Link> {
		let mut link = Link::new(Self::join_url(base_url, subpath), method.clone());
		link.description = self.description.clone();

		for name in Self::path_variables(subpath) {
			let schema = Schema::Object(
				ObjectBuilder::new()
					.schema_type(SchemaType::Type(Type::String))
					.build(),
			);
			link.fields
				.push(LinkField::new(name, FieldLocation::Path).schema(schema));
		}

		Ok(link)
	}
}
