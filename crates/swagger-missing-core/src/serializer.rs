//! Serializer introspection
//!
//! Hosts describe their serializers as an ordered list of [`SerializerField`]s.
//! A [`FieldConverter`] turns each field into an OpenAPI schema fragment.

use std::fmt;
use std::sync::Arc;
use utoipa::openapi::RefOr;
use utoipa::openapi::schema::{
	ArrayBuilder, KnownFormat, ObjectBuilder, Schema, SchemaFormat, SchemaType, Type,
};

/// A serializer whose fields can be documented
pub trait Serializer: Send + Sync {
	/// Serializer name, used to title its definitions (`<name>_read`, `<name>_write`)
	fn name(&self) -> &str;

	/// Declared fields, in declaration order
	fn fields(&self) -> Vec<SerializerField>;
}

/// Value kind of a serializer field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
	Boolean,
	Integer,
	Float,
	Decimal,
	String,
	Email,
	Url,
	Uuid,
	Date,
	DateTime,
	Time,
	Duration,
	File,
	Json,
	Choice(Vec<String>),
	MultipleChoice(Vec<String>),
	List(Box<FieldKind>),
	Dict,
	/// Nested serializer
	///
	/// Definitions reference the nested serializer's own definition in the
	/// same mode; a standalone conversion inlines it as an object.
	Nested(NestedSerializer),
	/// Primary key relation to another object
	Related,
}

impl FieldKind {
	pub fn nested(serializer: impl Serializer + 'static) -> Self {
		Self::Nested(NestedSerializer::new(serializer))
	}

	/// The nested serializer of this kind, looking through lists
	pub fn nested_serializer(&self) -> Option<&NestedSerializer> {
		match self {
			Self::Nested(nested) => Some(nested),
			Self::List(child) => child.nested_serializer(),
			_ => None,
		}
	}
}

/// Shared handle to a serializer nested inside another one
///
/// Two handles are equal when their serializers share a name.
#[derive(Clone)]
pub struct NestedSerializer(Arc<dyn Serializer>);

impl NestedSerializer {
	pub fn new(serializer: impl Serializer + 'static) -> Self {
		Self(Arc::new(serializer))
	}

	pub fn from_arc(serializer: Arc<dyn Serializer>) -> Self {
		Self(serializer)
	}

	pub fn serializer(&self) -> &dyn Serializer {
		self.0.as_ref()
	}

	pub fn name(&self) -> &str {
		self.0.name()
	}
}

impl fmt::Debug for NestedSerializer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("NestedSerializer").field(&self.name()).finish()
	}
}

impl PartialEq for NestedSerializer {
	fn eq(&self, other: &Self) -> bool {
		self.name() == other.name()
	}
}

/// Field metadata exposed by a [`Serializer`]
#[derive(Debug, Clone, PartialEq)]
pub struct SerializerField {
	pub name: String,
	pub kind: FieldKind,
	pub read_only: bool,
	pub write_only: bool,
	pub hidden: bool,
	pub required: bool,
	pub label: Option<String>,
	pub help_text: Option<String>,
}

impl SerializerField {
	/// A required, readable and writable field
	pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			name: name.into(),
			kind,
			read_only: false,
			write_only: false,
			hidden: false,
			required: true,
			label: None,
			help_text: None,
		}
	}

	pub fn read_only(mut self) -> Self {
		self.read_only = true;
		self.required = false;
		self
	}

	pub fn write_only(mut self) -> Self {
		self.write_only = true;
		self
	}

	pub fn hidden(mut self) -> Self {
		self.hidden = true;
		self
	}

	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}
}

/// Converts a serializer field to its schema representation
pub trait FieldConverter: Send + Sync {
	fn to_schema(&self, field: &SerializerField) -> RefOr<Schema>;
}

/// Maps [`FieldKind`]s to OpenAPI types and formats
///
/// The field label becomes the schema title and the help text its description.
///
/// # Example
///
/// ```rust
/// use swagger_missing_core::{DefaultFieldConverter, FieldConverter, FieldKind, SerializerField};
///
/// let field = SerializerField::new("created", FieldKind::DateTime).label("Created");
/// let schema = DefaultFieldConverter.to_schema(&field);
///
/// let json = serde_json::to_value(&schema).unwrap();
/// assert_eq!(json["type"], "string");
/// assert_eq!(json["format"], "date-time");
/// assert_eq!(json["title"], "Created");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFieldConverter;

impl DefaultFieldConverter {
	fn kind_to_schema(
		&self,
		kind: &FieldKind,
		title: Option<&str>,
		description: Option<&str>,
	) -> RefOr<Schema> {
		let (schema_type, format) = match kind {
			FieldKind::Boolean => (Type::Boolean, None),
			FieldKind::Integer | FieldKind::Related => (Type::Integer, None),
			FieldKind::Float => (Type::Number, None),
			FieldKind::Decimal => (Type::String, Some(SchemaFormat::Custom("decimal".to_string()))),
			FieldKind::String => (Type::String, None),
			FieldKind::Email => (Type::String, Some(SchemaFormat::Custom("email".to_string()))),
			FieldKind::Url => (Type::String, Some(SchemaFormat::Custom("uri".to_string()))),
			FieldKind::Uuid => (Type::String, Some(SchemaFormat::Custom("uuid".to_string()))),
			FieldKind::Date => (Type::String, Some(SchemaFormat::KnownFormat(KnownFormat::Date))),
			FieldKind::DateTime => (
				Type::String,
				Some(SchemaFormat::KnownFormat(KnownFormat::DateTime)),
			),
			FieldKind::Time => (Type::String, Some(SchemaFormat::Custom("time".to_string()))),
			FieldKind::Duration => (
				Type::String,
				Some(SchemaFormat::Custom("duration".to_string())),
			),
			FieldKind::File => (Type::String, Some(SchemaFormat::KnownFormat(KnownFormat::Binary))),
			FieldKind::Json | FieldKind::Dict => (Type::Object, None),
			FieldKind::Choice(choices) => {
				let schema = ObjectBuilder::new()
					.schema_type(SchemaType::Type(Type::String))
					.enum_values(Some(choices.clone()))
					.title(title)
					.description(description)
					.build();
				return RefOr::T(Schema::Object(schema));
			}
			FieldKind::MultipleChoice(choices) => {
				let items = ObjectBuilder::new()
					.schema_type(SchemaType::Type(Type::String))
					.enum_values(Some(choices.clone()))
					.build();
				let schema = ArrayBuilder::new()
					.items(RefOr::T(Schema::Object(items)))
					.title(title)
					.description(description)
					.build();
				return RefOr::T(Schema::Array(schema));
			}
			FieldKind::List(child) => {
				let schema = ArrayBuilder::new()
					.items(self.kind_to_schema(child, None, None))
					.title(title)
					.description(description)
					.build();
				return RefOr::T(Schema::Array(schema));
			}
			FieldKind::Nested(nested) => {
				let mut object = ObjectBuilder::new()
					.schema_type(SchemaType::Type(Type::Object))
					.title(title)
					.description(description);
				for field in nested.serializer().fields() {
					if field.hidden {
						continue;
					}
					if field.required && !field.read_only {
						object = object.required(field.name.clone());
					}
					object = object.property(field.name.clone(), self.to_schema(&field));
				}
				return RefOr::T(Schema::Object(object.build()));
			}
		};

		let schema = ObjectBuilder::new()
			.schema_type(SchemaType::Type(schema_type))
			.format(format)
			.title(title)
			.description(description)
			.build();
		RefOr::T(Schema::Object(schema))
	}
}

impl FieldConverter for DefaultFieldConverter {
	fn to_schema(&self, field: &SerializerField) -> RefOr<Schema> {
		self.kind_to_schema(
			&field.kind,
			field.label.as_deref(),
			field.help_text.as_deref(),
		)
	}
}
