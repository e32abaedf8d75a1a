//! # swagger-missing core
//!
//! Schema assembly for DRF-style REST applications.
//!
//! Given the `(path, method, view)` endpoints of an application, the
//! [`SchemaGenerator`] produces a [`SchemaDocument`] holding:
//!
//! - a [`LinkTree`] grouping every documented operation by path segment,
//! - a [`DefinitionTable`] with `<Serializer>_read` / `<Serializer>_write`
//!   object definitions derived from the views' serializers,
//! - the common path prefix and the API version.
//!
//! Hosts plug in through the [`Router`], [`SchemaView`], [`Serializer`],
//! [`PermissionCheck`] and [`LinkInspector`] traits. Every capability a
//! view may lack is an `Option` getter, so absent capabilities simply fall
//! back to defaults.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use http::Method;
//! use swagger_missing_core::{
//!     Endpoint, FieldKind, SchemaGenerator, SchemaView, Serializer, SerializerField,
//! };
//!
//! struct PizzaSerializer;
//!
//! impl Serializer for PizzaSerializer {
//!     fn name(&self) -> &str {
//!         "PizzaSerializer"
//!     }
//!
//!     fn fields(&self) -> Vec<SerializerField> {
//!         vec![
//!             SerializerField::new("id", FieldKind::Integer).read_only(),
//!             SerializerField::new("name", FieldKind::String),
//!         ]
//!     }
//! }
//!
//! struct PizzaList(PizzaSerializer);
//!
//! impl SchemaView for PizzaList {
//!     fn action(&self) -> Option<&str> {
//!         Some("list")
//!     }
//!
//!     fn serializer(&self) -> Option<&dyn Serializer> {
//!         Some(&self.0)
//!     }
//! }
//!
//! let endpoints = vec![Endpoint::new(
//!     "/api/pizza/",
//!     Method::GET,
//!     Arc::new(PizzaList(PizzaSerializer)),
//! )];
//!
//! let document = SchemaGenerator::new()
//!     .version("1.0.0")
//!     .generate(&endpoints)
//!     .unwrap()
//!     .expect("at least one endpoint");
//!
//! assert_eq!(document.base_path, "/api/");
//! assert!(document.definitions.contains("PizzaSerializer_read"));
//! ```

pub mod definitions;
pub mod endpoint;
pub mod generator;
pub mod inspector;
pub mod link;
pub mod prefix;
pub mod responses;
pub mod serializer;
pub mod settings;
pub mod view;

use thiserror::Error;

pub use definitions::{DefinitionField, DefinitionMode, DefinitionTable, ObjectDefinition};
pub use endpoint::{Endpoint, Router};
pub use generator::{GenerationContext, SchemaDocument, SchemaGenerator};
pub use inspector::{AutoLinkInspector, LinkInspector};
pub use link::{
	FieldLocation, Link, LinkEntry, LinkField, LinkResponse, LinkTree, ResponseSchema,
};
pub use prefix::{coerce_path, determine_path_prefix};
pub use serializer::{
	DefaultFieldConverter, FieldConverter, FieldKind, NestedSerializer, Serializer, SerializerField,
};
pub use settings::GeneratorSettings;
pub use view::{PermissionCheck, SchemaView, ViewMeta};

#[derive(Debug, Error)]
pub enum SchemaError {
	#[error("Can not recognize method {0}")]
	UnsupportedMethod(String),

	#[error("Link key conflict at {0}")]
	KeyConflict(String),

	#[error("Inspector error: {0}")]
	Inspector(String),

	#[error("Settings error: {0}")]
	Settings(String),
}

pub type SchemaResult<T> = std::result::Result<T, SchemaError>;
