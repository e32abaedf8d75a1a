//! OpenAPI rendering of assembled schema documents.

pub use swagger_missing_openapi::*;
