//! End-to-end generation passes over a pizza / topping API

use http::Method;
use rstest::rstest;
use std::sync::Arc;
use swagger_missing::{
	DefinitionMode, Endpoint, FieldLocation, LinkField, LinkResponse, ObjectDefinition,
	ResponseSchema, SchemaError, SchemaGenerator, ViewMeta,
};
use swagger_missing_integration_tests::{
	ActionView, PizzaSerializer, ToppingSerializer, endpoint, food_endpoints,
};

#[test]
fn test_prefix_and_link_keys() {
	let document = SchemaGenerator::new()
		.generate(&food_endpoints())
		.unwrap()
		.expect("document");

	assert_eq!(document.base_path, "/api/v1/");
	assert!(document.links.link(&["pizza", "get"]).is_some());
	assert!(document.links.link(&["pizza", "post"]).is_some());
	assert!(document.links.link(&["pizza", "{id}", "get"]).is_some());
	assert!(document.links.link(&["pizza", "{id}", "delete"]).is_some());
	assert!(document.links.link(&["topping", "get"]).is_some());
	assert_eq!(document.links.links().len(), 7);
}

#[test]
fn test_empty_input_has_no_document() {
	let endpoints: Vec<Endpoint> = Vec::new();
	assert!(SchemaGenerator::new().generate(&endpoints).unwrap().is_none());
}

#[test]
fn test_all_excluded_has_no_document() {
	let endpoints = vec![endpoint(
		"/api/pizza/",
		Method::GET,
		ActionView::new("list").serializer(PizzaSerializer).excluded(),
	)];
	assert!(SchemaGenerator::new().generate(&endpoints).unwrap().is_none());
}

#[test]
fn test_excluded_view_is_left_out_of_prefix() {
	let endpoints = vec![
		endpoint(
			"/api/v1/pizza/",
			Method::GET,
			ActionView::new("list").serializer(PizzaSerializer),
		),
		endpoint("/internal/", Method::GET, ActionView::new("list").excluded()),
	];
	let document = SchemaGenerator::new().generate(&endpoints).unwrap().unwrap();

	assert_eq!(document.base_path, "/api/v1/");
	assert_eq!(document.links.links().len(), 1);
}

#[rstest]
#[case(Method::POST, "create")]
#[case(Method::PUT, "update")]
#[case(Method::PATCH, "partial_update")]
fn test_write_implies_read(#[case] method: Method, #[case] action: &'static str) {
	let endpoints = vec![endpoint(
		"/api/pizza/{id}/",
		method,
		ActionView::new(action).serializer(PizzaSerializer),
	)];
	let document = SchemaGenerator::new().generate(&endpoints).unwrap().unwrap();

	assert!(document.definitions.contains("Pizza_write"));
	assert!(document.definitions.contains("Pizza_read"));
}

#[test]
fn test_definitions_partition_fields() {
	let document = SchemaGenerator::new()
		.generate(&food_endpoints())
		.unwrap()
		.unwrap();

	let read = document.definitions.get("Pizza_read").unwrap();
	assert_eq!(read.field_names(), vec!["id", "name", "paid"]);

	let write = document.definitions.get("Pizza_write").unwrap();
	assert_eq!(write.field_names(), vec!["name", "paid", "secret_sauce"]);

	assert!(document.definitions.contains("Topping_read"));
	assert!(!document.definitions.contains("Topping_write"));
	assert_eq!(document.definitions.len(), 3);
}

#[test]
fn test_default_response_table() {
	let document = SchemaGenerator::new()
		.generate(&food_endpoints())
		.unwrap()
		.unwrap();
	let links = &document.links;

	let list = links.link(&["pizza", "get"]).unwrap();
	assert_eq!(
		list.response(200).unwrap().schema,
		Some(ResponseSchema::array_of(ResponseSchema::reference(
			DefinitionMode::Read.title("Pizza")
		)))
	);

	let create = links.link(&["pizza", "post"]).unwrap();
	assert_eq!(
		create.response(201).unwrap().schema,
		Some(ResponseSchema::reference("Pizza_write"))
	);

	let destroy = links.link(&["pizza", "{id}", "delete"]).unwrap();
	assert_eq!(destroy.responses.len(), 1);
	assert!(destroy.response(204).unwrap().schema.is_none());

	for method in ["get", "put", "patch"] {
		let link = links.link(&["pizza", "{id}", method]).unwrap();
		assert_eq!(
			link.response(200).unwrap().schema,
			Some(ResponseSchema::reference("Pizza_read"))
		);
	}
}

#[test]
fn test_user_override_replaces_only_colliding_status() {
	let meta = ViewMeta::new()
		.response(
			"list",
			LinkResponse::new(200).schema(ResponseSchema::reference("PizzaPage")),
		)
		.response("list", LinkResponse::new(401).description("Login first"));
	let endpoints = vec![endpoint(
		"/api/pizza/",
		Method::GET,
		ActionView::new("list").serializer(PizzaSerializer).meta(meta),
	)];
	let document = SchemaGenerator::new().generate(&endpoints).unwrap().unwrap();

	let link = document.links.link(&["pizza", "get"]).unwrap();
	assert_eq!(
		link.response(200).unwrap().schema,
		Some(ResponseSchema::reference("PizzaPage"))
	);
	assert_eq!(
		link.response(401).unwrap().description.as_deref(),
		Some("Login first")
	);
	assert_eq!(link.responses.len(), 2);
}

#[test]
fn test_unrecognized_action_has_no_default_response() {
	let endpoints = vec![endpoint(
		"/api/pizza/{id}/bake/",
		Method::POST,
		ActionView::new("bake").serializer(PizzaSerializer),
	)];
	let document = SchemaGenerator::new().generate(&endpoints).unwrap().unwrap();

	let link = document.links.link(&["pizza", "{id}", "bake", "post"]).unwrap();
	assert!(link.responses.is_empty());
	// Definitions still follow the method
	assert!(document.definitions.contains("Pizza_write"));
}

#[test]
fn test_permission_denied_endpoint_is_dropped() {
	let endpoints = vec![
		endpoint(
			"/api/pizza/",
			Method::GET,
			ActionView::new("list").serializer(PizzaSerializer).permission(true),
		),
		endpoint(
			"/api/topping/",
			Method::GET,
			ActionView::new("list").serializer(ToppingSerializer).permission(false),
		),
	];
	let document = SchemaGenerator::new().generate(&endpoints).unwrap().unwrap();

	assert!(document.links.link(&["pizza", "get"]).is_some());
	assert!(document.links.get(&["topping"]).is_none());
	assert!(!document.definitions.contains("Topping_read"));
}

#[test]
fn test_permission_check_can_be_disabled() {
	let endpoints = vec![endpoint(
		"/api/topping/",
		Method::GET,
		ActionView::new("list").serializer(ToppingSerializer).permission(false),
	)];
	let document = SchemaGenerator::new()
		.check_view_permissions(false)
		.generate(&endpoints)
		.unwrap()
		.unwrap();

	assert!(document.links.link(&["topping", "get"]).is_some());
}

#[test]
fn test_all_denied_still_produces_document() {
	let endpoints = vec![endpoint(
		"/api/topping/",
		Method::GET,
		ActionView::new("list").permission(false),
	)];
	let document = SchemaGenerator::new().generate(&endpoints).unwrap().unwrap();

	assert_eq!(document.base_path, "/api/");
	assert!(document.links.is_empty());
}

#[test]
fn test_extra_filter_fields_and_produces() {
	let meta = ViewMeta::new()
		.field("list", LinkField::new("search", FieldLocation::Query))
		.field("list", LinkField::new("ordering", FieldLocation::Query))
		.produces("list", ["application/json", "text/csv"]);
	let endpoints = vec![endpoint(
		"/api/pizza/",
		Method::GET,
		ActionView::new("list").serializer(PizzaSerializer).meta(meta),
	)];
	let document = SchemaGenerator::new().generate(&endpoints).unwrap().unwrap();

	let link = document.links.link(&["pizza", "get"]).unwrap();
	let names: Vec<&str> = link.fields.iter().map(|f| f.name.as_str()).collect();
	assert_eq!(names, vec!["search", "ordering"]);
	assert_eq!(link.produces, vec!["application/json", "text/csv"]);
}

#[test]
fn test_preloaded_definitions_win() {
	let endpoints = vec![endpoint(
		"/api/pizza/",
		Method::GET,
		ActionView::new("list").serializer(PizzaSerializer),
	)];
	let document = SchemaGenerator::new()
		.with_definitions([ObjectDefinition::new("Pizza_read"), ObjectDefinition::new("Error")])
		.generate(&endpoints)
		.unwrap()
		.unwrap();

	assert!(document.definitions.get("Pizza_read").unwrap().fields.is_empty());
	assert!(document.definitions.contains("Error"));
}

#[test]
fn test_metadata_attached_once() {
	let document = SchemaGenerator::new()
		.title("Food API")
		.version("2.1.0")
		.description("Pizza and toppings")
		.url("https://food.example.com")
		.generate(&food_endpoints())
		.unwrap()
		.unwrap();

	assert_eq!(document.title, "Food API");
	assert_eq!(document.version, "2.1.0");
	assert_eq!(document.description.as_deref(), Some("Pizza and toppings"));
	assert_eq!(
		document.links.link(&["topping", "get"]).unwrap().url,
		"https://food.example.com/topping/"
	);
}

#[test]
fn test_passes_do_not_share_definitions() {
	let generator = Arc::new(SchemaGenerator::new());

	let pizza = vec![endpoint(
		"/api/pizza/",
		Method::POST,
		ActionView::new("create").serializer(PizzaSerializer),
	)];
	let topping = vec![endpoint(
		"/api/topping/",
		Method::GET,
		ActionView::new("list").serializer(ToppingSerializer),
	)];

	let handles: Vec<_> = [pizza, topping]
		.into_iter()
		.map(|endpoints| {
			let generator = Arc::clone(&generator);
			std::thread::spawn(move || generator.generate(&endpoints).unwrap().unwrap())
		})
		.collect();
	let documents: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

	let pizza_titles: Vec<&str> = documents[0].definitions.titles().collect();
	assert_eq!(pizza_titles, vec!["Pizza_read", "Pizza_write"]);
	let topping_titles: Vec<&str> = documents[1].definitions.titles().collect();
	assert_eq!(topping_titles, vec!["Topping_read"]);
}

#[test]
fn test_duplicate_endpoint_is_key_conflict() {
	let endpoints = vec![
		endpoint("/api/pizza/", Method::GET, ActionView::new("list")),
		endpoint("/api/pizza/", Method::GET, ActionView::new("list")),
	];
	let err = SchemaGenerator::new().generate(&endpoints).unwrap_err();
	assert!(matches!(err, SchemaError::KeyConflict(_)));
}
