//! Schema assembly.
//!
//! Link tree, object definitions and the generator itself.

pub use swagger_missing_core::*;
