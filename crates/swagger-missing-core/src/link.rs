//! Links and the link tree
//!
//! A [`Link`] documents one operation. Links are grouped in a [`LinkTree`]
//! keyed by path segment, with the lowercase method name as the innermost key.

use crate::{SchemaError, SchemaResult};
use http::Method;
use indexmap::IndexMap;
use utoipa::openapi::schema::Schema;
use utoipa::openapi::RefOr;

/// Where a link field is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLocation {
	Path,
	Query,
	Form,
	Body,
}

/// A parameter of a link
#[derive(Debug, Clone, PartialEq)]
pub struct LinkField {
	pub name: String,
	pub location: FieldLocation,
	pub required: bool,
	pub description: Option<String>,
	pub schema: Option<RefOr<Schema>>,
}

impl LinkField {
	pub fn new(name: impl Into<String>, location: FieldLocation) -> Self {
		Self {
			name: name.into(),
			location,
			required: location == FieldLocation::Path,
			description: None,
			schema: None,
		}
	}

	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn schema(mut self, schema: impl Into<RefOr<Schema>>) -> Self {
		self.schema = Some(schema.into());
		self
	}
}

/// Body shape of a response
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseSchema {
	/// Reference to a definition by title
	Ref(String),
	Array(Box<ResponseSchema>),
	Inline(RefOr<Schema>),
}

impl ResponseSchema {
	pub fn reference(title: impl Into<String>) -> Self {
		Self::Ref(title.into())
	}

	pub fn array_of(items: ResponseSchema) -> Self {
		Self::Array(Box::new(items))
	}
}

/// One entry of a link's response table
#[derive(Debug, Clone, PartialEq)]
pub struct LinkResponse {
	pub status: u16,
	pub description: Option<String>,
	pub schema: Option<ResponseSchema>,
}

impl LinkResponse {
	pub fn new(status: u16) -> Self {
		Self {
			status,
			description: None,
			schema: None,
		}
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn schema(mut self, schema: ResponseSchema) -> Self {
		self.schema = Some(schema);
		self
	}
}

/// One documented operation
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
	/// URL of the operation: the base url joined with the subpath. The prefix
	/// is carried by the document's base path instead.
	pub url: String,
	pub method: Method,
	pub action: String,
	pub fields: Vec<LinkField>,
	pub responses: IndexMap<u16, LinkResponse>,
	pub produces: Vec<String>,
	pub description: Option<String>,
}

impl Link {
	pub fn new(url: impl Into<String>, method: Method) -> Self {
		let action = method.as_str().to_lowercase();
		Self {
			url: url.into(),
			method,
			action,
			fields: Vec::new(),
			responses: IndexMap::new(),
			produces: Vec::new(),
			description: None,
		}
	}

	pub fn field(mut self, field: LinkField) -> Self {
		self.fields.push(field);
		self
	}

	/// Insert a response, replacing any entry with the same status
	pub fn insert_response(&mut self, response: LinkResponse) {
		self.responses.insert(response.status, response);
	}

	pub fn response(&self, status: u16) -> Option<&LinkResponse> {
		self.responses.get(&status)
	}
}

/// A link tree node entry
#[derive(Debug, Clone, PartialEq)]
pub enum LinkEntry {
	Node(LinkTree),
	Link(Link),
}

/// Links grouped by path segment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkTree {
	entries: IndexMap<String, LinkEntry>,
}

impl LinkTree {
	pub fn new() -> Self {
		Self::default()
	}

	/// Tree keys for a subpath and method: the non-empty path segments
	/// followed by the lowercase method name
	///
	/// # Example
	///
	/// ```rust
	/// use http::Method;
	/// use swagger_missing_core::LinkTree;
	///
	/// assert_eq!(
	///     LinkTree::keys_for("pizza/{id}/", &Method::PATCH),
	///     vec!["pizza", "{id}", "patch"],
	/// );
	/// ```
	pub fn keys_for(subpath: &str, method: &Method) -> Vec<String> {
		subpath
			.split('/')
			.filter(|segment| !segment.is_empty())
			.map(str::to_string)
			.chain(std::iter::once(method.as_str().to_lowercase()))
			.collect()
	}

	/// Insert a link under `keys`, creating intermediate nodes
	///
	/// Fails when a key is already taken by a link, or when the path passes
	/// through a link.
	pub fn insert(&mut self, keys: &[String], link: Link) -> SchemaResult<()> {
		let Some((last, parents)) = keys.split_last() else {
			return Err(SchemaError::KeyConflict("<empty key path>".to_string()));
		};

		let mut node = self;
		for (depth, key) in parents.iter().enumerate() {
			let entry = node
				.entries
				.entry(key.clone())
				.or_insert_with(|| LinkEntry::Node(LinkTree::new()));
			node = match entry {
				LinkEntry::Node(child) => child,
				LinkEntry::Link(_) => {
					return Err(SchemaError::KeyConflict(keys[..=depth].join(".")));
				}
			};
		}

		if node.entries.contains_key(last) {
			return Err(SchemaError::KeyConflict(keys.join(".")));
		}
		node.entries.insert(last.clone(), LinkEntry::Link(link));
		Ok(())
	}

	/// Look up an entry by key path
	pub fn get(&self, keys: &[&str]) -> Option<&LinkEntry> {
		let (first, rest) = keys.split_first()?;
		let entry = self.entries.get(*first)?;
		if rest.is_empty() {
			return Some(entry);
		}
		match entry {
			LinkEntry::Node(child) => child.get(rest),
			LinkEntry::Link(_) => None,
		}
	}

	/// Look up a link by key path
	pub fn link(&self, keys: &[&str]) -> Option<&Link> {
		match self.get(keys)? {
			LinkEntry::Link(link) => Some(link),
			LinkEntry::Node(_) => None,
		}
	}

	pub fn entries(&self) -> impl Iterator<Item = (&String, &LinkEntry)> {
		self.entries.iter()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// All links in insertion order, depth first
	pub fn links(&self) -> Vec<&Link> {
		let mut links = Vec::new();
		self.collect_links(&mut links);
		links
	}

	fn collect_links<'a>(&'a self, links: &mut Vec<&'a Link>) {
		for entry in self.entries.values() {
			match entry {
				LinkEntry::Link(link) => links.push(link),
				LinkEntry::Node(child) => child.collect_links(links),
			}
		}
	}
}
