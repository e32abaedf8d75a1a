//! Response table inference for conventional viewset actions

use crate::definitions::DefinitionMode;
use crate::link::{Link, LinkResponse, ResponseSchema};
use crate::view::SchemaView;
use http::Method;

/// Action name of a view for a method: the declared action, or the lowercase method
pub fn action_name(view: &dyn SchemaView, method: &Method) -> String {
	view.action()
		.map(str::to_string)
		.unwrap_or_else(|| method.as_str().to_lowercase())
}

/// Default response for a conventional action
///
/// | action | status | body |
/// |---|---|---|
/// | `retrieve`, `update`, `partial_update` | 200 | `<S>_read` |
/// | `list` | 200 | array of `<S>_read` |
/// | `create` | 201 | `<S>_write` |
/// | `destroy` | 204 | none |
///
/// Any other action has no default response.
///
/// # Example
///
/// ```rust
/// use swagger_missing_core::responses::default_response;
/// use swagger_missing_core::ResponseSchema;
///
/// let response = default_response("list", "PizzaSerializer").unwrap();
/// assert_eq!(response.status, 200);
/// assert_eq!(
///     response.schema,
///     Some(ResponseSchema::array_of(ResponseSchema::reference("PizzaSerializer_read")))
/// );
///
/// assert!(default_response("bake", "PizzaSerializer").is_none());
/// ```
pub fn default_response(action: &str, serializer_name: &str) -> Option<LinkResponse> {
	let read = || ResponseSchema::reference(DefinitionMode::Read.title(serializer_name));

	let response = match action {
		"retrieve" | "update" | "partial_update" => LinkResponse::new(200).schema(read()),
		"list" => LinkResponse::new(200).schema(ResponseSchema::array_of(read())),
		"create" => LinkResponse::new(201).schema(ResponseSchema::reference(
			DefinitionMode::Write.title(serializer_name),
		)),
		"destroy" => LinkResponse::new(204),
		_ => return None,
	};
	Some(response)
}

/// Fill a link's response table and produced content types from a view
///
/// The inferred default goes in first (when the view has a serializer), then
/// user-declared responses for the action replace colliding status codes.
pub fn apply_view_responses(link: &mut Link, view: &dyn SchemaView, action: &str) {
	link.responses.clear();

	if let Some(serializer) = view.serializer() {
		if let Some(response) = default_response(action, serializer.name()) {
			link.insert_response(response);
		}
	}

	let meta = view.meta();
	if let Some(declared) = meta.and_then(|meta| meta.responses_for(action)) {
		for response in declared {
			link.insert_response(response.clone());
		}
	}

	link.produces = meta
		.and_then(|meta| meta.produces_for(action))
		.map(<[String]>::to_vec)
		.unwrap_or_default();
}
