//! Schema document assembly
//!
//! [`SchemaGenerator::generate`] runs one generation pass:
//!
//! 1. drop excluded views and coerce paths,
//! 2. resolve the common path prefix,
//! 3. drop endpoints the view denies permission for,
//! 4. build and insert a link per endpoint, deriving object definitions
//!    from the endpoint's serializer,
//! 5. attach prefix, definitions and version to the document.
//!
//! Each pass owns a fresh [`GenerationContext`], so a generator can be shared
//! between threads.

use crate::definitions::{DefinitionTable, ObjectDefinition};
use crate::endpoint::{Endpoint, Router};
use crate::inspector::{AutoLinkInspector, LinkInspector};
use crate::link::{Link, LinkTree};
use crate::prefix::{coerce_path, determine_path_prefix};
use crate::responses::{action_name, apply_view_responses};
use crate::serializer::{DefaultFieldConverter, FieldConverter};
use crate::settings::GeneratorSettings;
use crate::view::SchemaView;
use crate::SchemaResult;
use http::Method;
use std::sync::Arc;

/// The assembled schema document
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
	pub title: String,
	pub url: Option<String>,
	pub description: Option<String>,
	pub version: String,
	/// Path prefix shared by every link, stripped from the link tree keys
	pub base_path: String,
	pub links: LinkTree,
	pub definitions: DefinitionTable,
}

/// State accumulated during one generation pass
#[derive(Debug, Clone)]
pub struct GenerationContext {
	prefix: String,
	links: LinkTree,
	definitions: DefinitionTable,
}

impl GenerationContext {
	/// A context for a pass with the given prefix and seed definitions
	pub fn new(prefix: impl Into<String>, definitions: DefinitionTable) -> Self {
		Self {
			prefix: prefix.into(),
			links: LinkTree::new(),
			definitions,
		}
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	pub fn links(&self) -> &LinkTree {
		&self.links
	}

	pub fn definitions(&self) -> &DefinitionTable {
		&self.definitions
	}

	pub fn definitions_mut(&mut self) -> &mut DefinitionTable {
		&mut self.definitions
	}

	/// Path relative to the prefix
	pub fn subpath<'a>(&self, path: &'a str) -> &'a str {
		path.strip_prefix(self.prefix.as_str())
			.unwrap_or_else(|| path.trim_start_matches('/'))
	}

	/// Insert a link under the keys derived from its subpath and method
	pub fn insert_link(&mut self, subpath: &str, method: &Method, link: Link) -> SchemaResult<()> {
		let keys = LinkTree::keys_for(subpath, method);
		self.links.insert(&keys, link)
	}
}

/// Schema generator
///
/// # Example
///
/// ```rust
/// use swagger_missing_core::{Endpoint, SchemaGenerator};
///
/// let generator = SchemaGenerator::new()
///     .title("Food API")
///     .version("1.0.0")
///     .check_view_permissions(false);
///
/// // No endpoints, no document
/// let endpoints: Vec<Endpoint> = Vec::new();
/// assert!(generator.generate(&endpoints).unwrap().is_none());
/// ```
#[derive(Clone)]
pub struct SchemaGenerator {
	settings: GeneratorSettings,
	definitions: DefinitionTable,
	converter: Arc<dyn FieldConverter>,
	inspector: AutoLinkInspector,
}

impl SchemaGenerator {
	/// Create a generator with default settings
	pub fn new() -> Self {
		Self::with_settings(GeneratorSettings::default())
	}

	pub fn with_settings(settings: GeneratorSettings) -> Self {
		Self {
			settings,
			definitions: DefinitionTable::new(),
			converter: Arc::new(DefaultFieldConverter),
			inspector: AutoLinkInspector::new(),
		}
	}

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.settings.title = title.into();
		self
	}

	pub fn version(mut self, version: impl Into<String>) -> Self {
		self.settings.version = version.into();
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.settings.description = Some(description.into());
		self
	}

	/// Base URL for link URLs
	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.settings.url = Some(url.into());
		self
	}

	pub fn check_view_permissions(mut self, check: bool) -> Self {
		self.settings.check_view_permissions = check;
		self
	}

	pub fn coerce_path_pk(mut self, coerce: bool) -> Self {
		self.settings.coerce_path_pk = coerce;
		self
	}

	/// Definitions present in every generated document
	///
	/// They take precedence over derived definitions with the same title.
	pub fn with_definitions<I>(mut self, definitions: I) -> Self
	where
		I: IntoIterator<Item = ObjectDefinition>,
	{
		for definition in definitions {
			self.definitions.register(definition);
		}
		self
	}

	pub fn field_converter(mut self, converter: Arc<dyn FieldConverter>) -> Self {
		self.converter = converter;
		self
	}

	/// Link construction for views without their own inspector
	pub fn default_inspector(mut self, inspector: AutoLinkInspector) -> Self {
		self.inspector = inspector;
		self
	}

	pub fn settings(&self) -> &GeneratorSettings {
		&self.settings
	}

	/// Run one generation pass over the router's endpoints
	///
	/// Returns `Ok(None)` when no endpoint is left once excluded views are
	/// dropped. Any endpoint failing aborts the whole pass.
	pub fn generate<R: Router + ?Sized>(&self, router: &R) -> SchemaResult<Option<SchemaDocument>> {
		let endpoints = self.included_endpoints(router.endpoints());

		let paths: Vec<&str> = endpoints.iter().map(|e| e.path.as_str()).collect();
		let Some(prefix) = determine_path_prefix(&paths) else {
			tracing::debug!("no endpoints to document");
			return Ok(None);
		};

		let mut context = GenerationContext::new(prefix, self.definitions.clone());
		for endpoint in &endpoints {
			if self.settings.check_view_permissions && !Self::has_view_permissions(endpoint) {
				tracing::debug!(
					path = %endpoint.path,
					method = %endpoint.method,
					"skipping endpoint without view permission"
				);
				continue;
			}
			self.add_endpoint(&mut context, endpoint)?;
		}

		let document = self.finish(context);
		tracing::info!(
			base_path = %document.base_path,
			links = document.links.links().len(),
			definitions = document.definitions.len(),
			"generated schema document"
		);
		Ok(Some(document))
	}

	/// Drop excluded views, then root and coerce the remaining paths
	///
	/// Paths always start with `/` afterwards, matching the resolved prefix.
	fn included_endpoints(&self, endpoints: Vec<Endpoint>) -> Vec<Endpoint> {
		endpoints
			.into_iter()
			.filter(|endpoint| {
				let excluded = endpoint.view.is_excluded();
				if excluded {
					tracing::debug!(path = %endpoint.path, "view excluded from schema");
				}
				!excluded
			})
			.map(|mut endpoint| {
				if !endpoint.path.starts_with('/') {
					endpoint.path.insert(0, '/');
				}
				if self.settings.coerce_path_pk {
					endpoint.path = coerce_path(&endpoint.path);
				}
				endpoint
			})
			.collect()
	}

	fn has_view_permissions(endpoint: &Endpoint) -> bool {
		endpoint
			.view
			.permission()
			.is_none_or(|check| check.has_permission(&endpoint.path, &endpoint.method))
	}

	/// Build the link of one endpoint and derive its definitions
	pub fn add_endpoint(
		&self,
		context: &mut GenerationContext,
		endpoint: &Endpoint,
	) -> SchemaResult<()> {
		let subpath = context.subpath(&endpoint.path).to_string();
		let link = self.build_link(&subpath, &endpoint.method, endpoint.view.as_ref())?;
		context.insert_link(&subpath, &endpoint.method, link)?;

		context.definitions_mut().derive(
			&endpoint.method,
			endpoint.view.as_ref(),
			self.converter.as_ref(),
		)?;
		Ok(())
	}

	/// Build the link of a view and attach its fields, responses and content types
	pub fn build_link(
		&self,
		subpath: &str,
		method: &Method,
		view: &dyn SchemaView,
	) -> SchemaResult<Link> {
		let base_url = self.settings.url.as_deref().unwrap_or("");
		let inspector: &dyn LinkInspector = view.inspector().unwrap_or(&self.inspector);
		let mut link = inspector.get_link(subpath, method, base_url)?;

		let action = action_name(view, method);
		link.action = action.clone();

		if let Some(meta) = view.meta() {
			for field in meta.fields_for(&action) {
				if !link.fields.iter().any(|f| f.name == field.name) {
					link.fields.push(field.clone());
				}
			}
		}

		apply_view_responses(&mut link, view, &action);
		Ok(link)
	}

	fn finish(&self, context: GenerationContext) -> SchemaDocument {
		SchemaDocument {
			title: self.settings.title.clone(),
			url: self.settings.url.clone(),
			description: self.settings.description.clone(),
			version: self.settings.version.clone(),
			base_path: context.prefix,
			links: context.links,
			definitions: context.definitions,
		}
	}
}

impl Default for SchemaGenerator {
	fn default() -> Self {
		Self::new()
	}
}
