//! # swagger-missing
//!
//! Schema generation for DRF-style REST APIs, filling in what plain schema
//! generators leave out:
//!
//! - per-view response tables, inferred from conventional action names and
//!   extended or overridden per action,
//! - `<Serializer>_read` / `<Serializer>_write` object definitions split by
//!   read-only and write-only fields,
//! - permission-aware endpoint filtering,
//! - the common path prefix and API version on the generated document.
//!
//! ## Feature Flags
//!
//! - `openapi` (default) - render documents as OpenAPI JSON / YAML via utoipa
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use http::Method;
//! use swagger_missing::{Endpoint, SchemaGenerator, SchemaView};
//!
//! struct Ping;
//! impl SchemaView for Ping {}
//!
//! let endpoints = vec![Endpoint::new("/api/ping/", Method::GET, Arc::new(Ping))];
//! let document = SchemaGenerator::new()
//!     .version("1.0.0")
//!     .generate(&endpoints)
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(document.base_path, "/api/");
//! assert_eq!(document.version, "1.0.0");
//! ```

#[cfg(feature = "openapi")]
pub mod openapi;
pub mod schema;

pub use swagger_missing_core::{
	AutoLinkInspector, DefaultFieldConverter, DefinitionField, DefinitionMode, DefinitionTable,
	Endpoint, FieldConverter, FieldKind, FieldLocation, GenerationContext, GeneratorSettings,
	Link, LinkEntry, LinkField, LinkInspector, LinkResponse, LinkTree, ObjectDefinition,
	PermissionCheck, ResponseSchema, Router, SchemaDocument, SchemaError, SchemaGenerator,
	SchemaResult, SchemaView, Serializer, SerializerField, ViewMeta,
};

#[cfg(feature = "openapi")]
pub use swagger_missing_openapi::{OpenApiRenderer, RenderError, RenderResult};
