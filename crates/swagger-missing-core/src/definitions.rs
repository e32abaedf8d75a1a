//! Object definitions derived from serializers
//!
//! Each serializer yields up to two definitions: `<name>_read`, describing
//! what the API returns, and `<name>_write`, describing what it accepts.
//! Write endpoints also get the read definition, since write actions
//! conventionally echo the read shape back. Nested serializers get their own
//! definitions in the mode of the definition that contains them.

use crate::serializer::{FieldConverter, FieldKind, Serializer, SerializerField};
use crate::view::SchemaView;
use crate::{SchemaError, SchemaResult};
use http::Method;
use indexmap::IndexMap;
use utoipa::openapi::schema::{ArrayBuilder, Schema};
use utoipa::openapi::{Ref, RefOr};

/// Whether a definition describes returned or accepted data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionMode {
	Read,
	Write,
}

impl DefinitionMode {
	/// Classify a method: POST/PUT/PATCH write, GET/DELETE/HEAD read
	///
	/// Any other method is a caller error.
	pub fn for_method(method: &Method) -> SchemaResult<Self> {
		match *method {
			Method::POST | Method::PUT | Method::PATCH => Ok(Self::Write),
			Method::GET | Method::DELETE | Method::HEAD => Ok(Self::Read),
			_ => Err(SchemaError::UnsupportedMethod(method.to_string())),
		}
	}

	pub fn suffix(self) -> &'static str {
		match self {
			Self::Read => "read",
			Self::Write => "write",
		}
	}

	/// Definition title for a serializer name in this mode
	pub fn title(self, serializer_name: &str) -> String {
		format!("{}_{}", serializer_name, self.suffix())
	}

	/// Whether a field belongs in a definition of this mode
	pub fn includes(self, field: &SerializerField) -> bool {
		if field.hidden {
			return false;
		}
		match self {
			Self::Read => !field.write_only,
			Self::Write => !field.read_only,
		}
	}
}

/// A field of an object definition
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionField {
	pub name: String,
	pub required: bool,
	pub schema: RefOr<Schema>,
}

/// A named, reusable object schema
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDefinition {
	pub title: String,
	pub fields: Vec<DefinitionField>,
}

impl ObjectDefinition {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			fields: Vec::new(),
		}
	}

	pub fn field_names(&self) -> Vec<&str> {
		self.fields.iter().map(|f| f.name.as_str()).collect()
	}

	/// Build the definition of a serializer in the given mode
	///
	/// Nested fields reference `<nested name>_<mode>` instead of going
	/// through the converter.
	pub fn from_serializer(
		serializer: &dyn Serializer,
		mode: DefinitionMode,
		converter: &dyn FieldConverter,
	) -> Self {
		let fields = serializer
			.fields()
			.into_iter()
			.filter(|field| mode.includes(field))
			.map(|field| DefinitionField {
				schema: nested_reference(&field.kind, mode)
					.unwrap_or_else(|| converter.to_schema(&field)),
				required: field.required,
				name: field.name,
			})
			.collect();

		Self {
			title: mode.title(serializer.name()),
			fields,
		}
	}
}

fn nested_reference(kind: &FieldKind, mode: DefinitionMode) -> Option<RefOr<Schema>> {
	match kind {
		FieldKind::Nested(nested) => Some(RefOr::Ref(Ref::from_schema_name(
			mode.title(nested.name()),
		))),
		FieldKind::List(child) => nested_reference(child, mode)
			.map(|items| RefOr::T(Schema::Array(ArrayBuilder::new().items(items).build()))),
		_ => None,
	}
}

/// Definitions registered during one generation pass, keyed by title
///
/// Registration is insert-once: a title already present is never replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefinitionTable {
	definitions: IndexMap<String, ObjectDefinition>,
}

impl DefinitionTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn contains(&self, title: &str) -> bool {
		self.definitions.contains_key(title)
	}

	pub fn get(&self, title: &str) -> Option<&ObjectDefinition> {
		self.definitions.get(title)
	}

	/// Register a definition unless its title is taken
	///
	/// Returns `true` when the definition was inserted.
	pub fn register(&mut self, definition: ObjectDefinition) -> bool {
		if self.contains(&definition.title) {
			return false;
		}
		self.definitions.insert(definition.title.clone(), definition);
		true
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}

	pub fn titles(&self) -> impl Iterator<Item = &str> {
		self.definitions.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = &ObjectDefinition> {
		self.definitions.values()
	}

	/// Derive and register the definition used by `method` on `view`
	///
	/// Returns the newly registered definition, or `None` when the view has
	/// no serializer or the definition already exists. Write methods register
	/// the read definition first.
	///
	/// # Example
	///
	/// ```rust
	/// use http::Method;
	/// use swagger_missing_core::{
	///     DefaultFieldConverter, DefinitionTable, FieldKind, SchemaView, Serializer,
	///     SerializerField,
	/// };
	///
	/// struct ToppingSerializer;
	///
	/// impl Serializer for ToppingSerializer {
	///     fn name(&self) -> &str {
	///         "ToppingSerializer"
	///     }
	///
	///     fn fields(&self) -> Vec<SerializerField> {
	///         vec![SerializerField::new("name", FieldKind::String)]
	///     }
	/// }
	///
	/// struct ToppingView(ToppingSerializer);
	///
	/// impl SchemaView for ToppingView {
	///     fn serializer(&self) -> Option<&dyn Serializer> {
	///         Some(&self.0)
	///     }
	/// }
	///
	/// let mut table = DefinitionTable::new();
	/// let view = ToppingView(ToppingSerializer);
	///
	/// let created = table.derive(&Method::POST, &view, &DefaultFieldConverter).unwrap();
	/// assert_eq!(created.unwrap().title, "ToppingSerializer_write");
	/// assert!(table.contains("ToppingSerializer_read"));
	///
	/// // Already registered
	/// assert!(table.derive(&Method::POST, &view, &DefaultFieldConverter).unwrap().is_none());
	/// ```
	pub fn derive(
		&mut self,
		method: &Method,
		view: &dyn SchemaView,
		converter: &dyn FieldConverter,
	) -> SchemaResult<Option<ObjectDefinition>> {
		let Some(serializer) = view.serializer() else {
			return Ok(None);
		};

		match DefinitionMode::for_method(method)? {
			DefinitionMode::Read => Ok(self.ensure(serializer, DefinitionMode::Read, converter)),
			DefinitionMode::Write => {
				self.ensure(serializer, DefinitionMode::Read, converter);
				Ok(self.ensure(serializer, DefinitionMode::Write, converter))
			}
		}
	}

	fn ensure(
		&mut self,
		serializer: &dyn Serializer,
		mode: DefinitionMode,
		converter: &dyn FieldConverter,
	) -> Option<ObjectDefinition> {
		let title = mode.title(serializer.name());
		if self.contains(&title) {
			tracing::debug!(definition = %title, "definition already registered");
			return None;
		}

		let definition = ObjectDefinition::from_serializer(serializer, mode, converter);
		tracing::debug!(
			definition = %definition.title,
			fields = definition.fields.len(),
			"registered definition"
		);
		self.register(definition.clone());

		// Parent is registered first so self-referencing serializers terminate
		for field in serializer.fields() {
			if !mode.includes(&field) {
				continue;
			}
			if let Some(nested) = field.kind.nested_serializer() {
				self.ensure(nested.serializer(), mode, converter);
			}
		}

		Some(definition)
	}
}

impl FromIterator<ObjectDefinition> for DefinitionTable {
	fn from_iter<I: IntoIterator<Item = ObjectDefinition>>(iter: I) -> Self {
		let mut table = Self::new();
		for definition in iter {
			table.register(definition);
		}
		table
	}
}
