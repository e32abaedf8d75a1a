//! SchemaDocument to OpenAPI conversion

use crate::RenderResult;
use http::{Method, StatusCode};
use indexmap::IndexMap;
use swagger_missing_core::{
	DefinitionTable, FieldLocation, Link, LinkField, LinkResponse, ObjectDefinition,
	ResponseSchema, SchemaDocument,
};
use utoipa::openapi::content::ContentBuilder;
use utoipa::openapi::path::{
	HttpMethod, Operation, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder,
};
use utoipa::openapi::request_body::{RequestBody, RequestBodyBuilder};
use utoipa::openapi::response::{Response, ResponseBuilder};
use utoipa::openapi::schema::{ArrayBuilder, ObjectBuilder, Schema, SchemaType, Type};
use utoipa::openapi::server::ServerBuilder;
use utoipa::openapi::{
	Components, ComponentsBuilder, InfoBuilder, OpenApi, OpenApiBuilder, PathsBuilder, Ref, RefOr,
	Required,
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Renders schema documents as OpenAPI
#[derive(Debug, Clone)]
pub struct OpenApiRenderer {
	default_content_type: String,
	default_response_description: String,
}

impl Default for OpenApiRenderer {
	fn default() -> Self {
		Self {
			default_content_type: "application/json".to_string(),
			default_response_description: "Successful operation".to_string(),
		}
	}
}

impl OpenApiRenderer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Content type used for links that declare none
	pub fn default_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.default_content_type = content_type.into();
		self
	}

	/// Description of the `default` response of links without a response table
	pub fn default_response_description(mut self, description: impl Into<String>) -> Self {
		self.default_response_description = description.into();
		self
	}

	/// Render a document as an OpenAPI object
	pub fn render(&self, document: &SchemaDocument) -> OpenApi {
		let info = InfoBuilder::new()
			.title(document.title.as_str())
			.version(document.version.as_str())
			.description(document.description.clone())
			.build();

		let mut grouped: IndexMap<String, Vec<&Link>> = IndexMap::new();
		for link in document.links.links() {
			grouped
				.entry(self.relative_path(document, link))
				.or_default()
				.push(link);
		}

		let mut paths = PathsBuilder::new();
		for (path, links) in grouped {
			let mut item = PathItemBuilder::new();
			for link in links {
				let Some(http_method) = http_method(&link.method) else {
					tracing::warn!(
						path = %path,
						method = %link.method,
						"method has no OpenAPI operation slot"
					);
					continue;
				};
				item = item.operation(http_method, self.operation(&path, link));
			}
			paths = paths.path(path, item.build());
		}

		let mut builder = OpenApiBuilder::new()
			.info(info)
			.paths(paths.build())
			.components(Some(self.components(&document.definitions)));

		if let Some(server) = server_url(document) {
			builder = builder.servers(Some(vec![ServerBuilder::new().url(server).build()]));
		}

		builder.build()
	}

	/// Render a document as pretty-printed OpenAPI JSON
	pub fn to_json(&self, document: &SchemaDocument) -> RenderResult<String> {
		Ok(serde_json::to_string_pretty(&self.render(document))?)
	}

	/// Render a document as OpenAPI YAML
	pub fn to_yaml(&self, document: &SchemaDocument) -> RenderResult<String> {
		Ok(serde_yaml::to_string(&self.render(document))?)
	}

	/// Link path relative to the server URL
	fn relative_path(&self, document: &SchemaDocument, link: &Link) -> String {
		let path = document
			.url
			.as_deref()
			.and_then(|url| link.url.strip_prefix(url.trim_end_matches('/')))
			.unwrap_or(&link.url);
		format!("/{}", path.trim_start_matches('/'))
	}

	fn operation(&self, path: &str, link: &Link) -> Operation {
		let words: Vec<&str> = path
			.split('/')
			.filter(|segment| !segment.is_empty() && !segment.starts_with('{'))
			.collect();

		let mut builder = OperationBuilder::new()
			.operation_id(Some(operation_id(&link.action, &words)))
			.description(link.description.clone());

		if let Some(tag) = words.first() {
			builder = builder.tag(*tag);
		}

		for field in &link.fields {
			let location = match field.location {
				FieldLocation::Path => ParameterIn::Path,
				FieldLocation::Query => ParameterIn::Query,
				FieldLocation::Form | FieldLocation::Body => continue,
			};
			builder = builder.parameter(
				ParameterBuilder::new()
					.name(field.name.as_str())
					.parameter_in(location)
					.required(required(field.required))
					.description(field.description.clone())
					.schema(field.schema.clone())
					.build(),
			);
		}

		if let Some(request_body) = self.request_body(link) {
			builder = builder.request_body(Some(request_body));
		}

		if link.responses.is_empty() {
			builder = builder.response(
				"default",
				ResponseBuilder::new()
					.description(self.default_response_description.as_str())
					.build(),
			);
		}
		for response in link.responses.values() {
			builder = builder.response(response.status.to_string(), self.response(link, response));
		}

		builder.build()
	}

	/// Request body from the link's form and body fields
	fn request_body(&self, link: &Link) -> Option<RequestBody> {
		let fields: Vec<&LinkField> = link
			.fields
			.iter()
			.filter(|f| matches!(f.location, FieldLocation::Form | FieldLocation::Body))
			.collect();
		if fields.is_empty() {
			return None;
		}

		let content_type = if fields.iter().any(|f| f.location == FieldLocation::Form) {
			FORM_CONTENT_TYPE
		} else {
			self.default_content_type.as_str()
		};

		let mut object = ObjectBuilder::new().schema_type(SchemaType::Type(Type::Object));
		for field in &fields {
			let schema = field
				.schema
				.clone()
				.unwrap_or_else(|| RefOr::T(Schema::Object(ObjectBuilder::new().build())));
			object = object.property(field.name.as_str(), schema);
			if field.required {
				object = object.required(field.name.as_str());
			}
		}

		Some(
			RequestBodyBuilder::new()
				.content(
					content_type,
					ContentBuilder::new()
						.schema(Some(Schema::Object(object.build())))
						.build(),
				)
				.required(Some(required(fields.iter().any(|f| f.required))))
				.build(),
		)
	}

	fn response(&self, link: &Link, response: &LinkResponse) -> Response {
		let description = response
			.description
			.clone()
			.or_else(|| {
				StatusCode::from_u16(response.status)
					.ok()
					.and_then(|status| status.canonical_reason())
					.map(str::to_string)
			})
			.unwrap_or_default();

		let mut builder = ResponseBuilder::new().description(description);
		if let Some(schema) = &response.schema {
			let schema = response_schema(schema);
			if link.produces.is_empty() {
				builder = builder.content(
					self.default_content_type.as_str(),
					ContentBuilder::new().schema(Some(schema)).build(),
				);
			} else {
				for content_type in &link.produces {
					builder = builder.content(
						content_type.as_str(),
						ContentBuilder::new().schema(Some(schema.clone())).build(),
					);
				}
			}
		}
		builder.build()
	}

	fn components(&self, definitions: &DefinitionTable) -> Components {
		definitions
			.iter()
			.fold(ComponentsBuilder::new(), |components, definition| {
				components.schema(definition.title.as_str(), definition_schema(definition))
			})
			.build()
	}
}

/// Object schema of a definition, properties in field order
pub fn definition_schema(definition: &ObjectDefinition) -> Schema {
	let mut object = ObjectBuilder::new()
		.schema_type(SchemaType::Type(Type::Object))
		.title(Some(definition.title.as_str()));
	for field in &definition.fields {
		object = object.property(field.name.as_str(), field.schema.clone());
		if field.required {
			object = object.required(field.name.as_str());
		}
	}
	Schema::Object(object.build())
}

/// OpenAPI schema of a response body
pub fn response_schema(schema: &ResponseSchema) -> RefOr<Schema> {
	match schema {
		ResponseSchema::Ref(title) => RefOr::Ref(Ref::from_schema_name(title.as_str())),
		ResponseSchema::Array(items) => RefOr::T(Schema::Array(
			ArrayBuilder::new().items(response_schema(items)).build(),
		)),
		ResponseSchema::Inline(schema) => schema.clone(),
	}
}

fn http_method(method: &Method) -> Option<HttpMethod> {
	match *method {
		Method::GET => Some(HttpMethod::Get),
		Method::POST => Some(HttpMethod::Post),
		Method::PUT => Some(HttpMethod::Put),
		Method::PATCH => Some(HttpMethod::Patch),
		Method::DELETE => Some(HttpMethod::Delete),
		Method::HEAD => Some(HttpMethod::Head),
		Method::OPTIONS => Some(HttpMethod::Options),
		Method::TRACE => Some(HttpMethod::Trace),
		_ => None,
	}
}

fn operation_id(action: &str, words: &[&str]) -> String {
	if words.is_empty() {
		action.to_string()
	} else {
		format!("{}_{}", action, words.join("_"))
	}
}

fn required(required: bool) -> Required {
	if required {
		Required::True
	} else {
		Required::False
	}
}

/// Server URL: the document URL joined with the base path
fn server_url(document: &SchemaDocument) -> Option<String> {
	match document.url.as_deref() {
		Some(url) => Some(format!("{}{}", url.trim_end_matches('/'), document.base_path)),
		None if document.base_path != "/" => Some(document.base_path.clone()),
		None => None,
	}
}
