//! Generator settings
//!
//! Settings can be built in code, or loaded from a TOML / JSON file or string.

use crate::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for a [`SchemaGenerator`](crate::SchemaGenerator)
///
/// # Example
///
/// ```rust
/// use swagger_missing_core::GeneratorSettings;
///
/// let settings = GeneratorSettings::from_toml_str(r#"
///     title = "Food API"
///     version = "2.0"
///     check_view_permissions = false
/// "#).unwrap();
///
/// assert_eq!(settings.title, "Food API");
/// assert!(!settings.check_view_permissions);
/// assert!(settings.coerce_path_pk);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
	/// Document title
	#[serde(default)]
	pub title: String,

	/// Base URL prepended to every link path
	#[serde(default)]
	pub url: Option<String>,

	/// Document description
	#[serde(default)]
	pub description: Option<String>,

	/// Version string attached to the document
	#[serde(default)]
	pub version: String,

	/// Drop endpoints whose view denies permission for the path and method
	#[serde(default = "default_true")]
	pub check_view_permissions: bool,

	/// Rewrite `{pk}` path variables to `{id}`
	#[serde(default = "default_true")]
	pub coerce_path_pk: bool,
}

fn default_true() -> bool {
	true
}

impl Default for GeneratorSettings {
	fn default() -> Self {
		Self {
			title: String::new(),
			url: None,
			description: None,
			version: String::new(),
			check_view_permissions: true,
			coerce_path_pk: true,
		}
	}
}

impl GeneratorSettings {
	/// Create new settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse settings from a TOML document
	pub fn from_toml_str(contents: &str) -> SchemaResult<Self> {
		toml::from_str(contents)
			.map_err(|e| SchemaError::Settings(format!("TOML parse error: {}", e)))
	}

	/// Parse settings from a JSON document
	pub fn from_json_str(contents: &str) -> SchemaResult<Self> {
		serde_json::from_str(contents)
			.map_err(|e| SchemaError::Settings(format!("JSON parse error: {}", e)))
	}

	/// Load settings from a `.toml` or `.json` file
	pub fn from_file(path: impl Into<PathBuf>) -> SchemaResult<Self> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			SchemaError::Settings(format!("Failed to read {}: {}", path.display(), e))
		})?;

		match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml_str(&contents),
			Some("json") => Self::from_json_str(&contents),
			_ => Err(SchemaError::Settings(
				"Supported formats: .toml, .json".to_string(),
			)),
		}
	}
}
