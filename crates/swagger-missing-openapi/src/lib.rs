//! # swagger-missing OpenAPI
//!
//! Renders a [`SchemaDocument`](swagger_missing_core::SchemaDocument) as an
//! OpenAPI document using utoipa's types.
//!
//! - the document's base path becomes part of the server URL,
//! - each link becomes an operation under its path,
//! - each object definition becomes a component schema, so the `_read` /
//!   `_write` references in responses resolve.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use http::Method;
//! use swagger_missing_core::{Endpoint, SchemaGenerator, SchemaView};
//! use swagger_missing_openapi::OpenApiRenderer;
//!
//! struct Health;
//! impl SchemaView for Health {}
//!
//! let endpoints = vec![Endpoint::new("/api/health/", Method::GET, Arc::new(Health))];
//! let document = SchemaGenerator::new()
//!     .title("Food API")
//!     .version("1.0.0")
//!     .generate(&endpoints)
//!     .unwrap()
//!     .unwrap();
//!
//! let json = OpenApiRenderer::new().to_json(&document).unwrap();
//! assert!(json.contains("\"/health/\""));
//! ```

pub mod renderer;

use thiserror::Error;

pub use renderer::OpenApiRenderer;
pub use utoipa::openapi::OpenApi;

#[derive(Debug, Error)]
pub enum RenderError {
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("YAML error: {0}")]
	Yaml(#[from] serde_yaml::Error),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
