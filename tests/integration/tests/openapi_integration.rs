//! OpenAPI rendering of generated documents

use serde_json::Value;
use swagger_missing::{OpenApiRenderer, SchemaGenerator};
use http::Method;
use swagger_missing_integration_tests::{ActionView, OrderSerializer, endpoint, food_endpoints};

fn rendered() -> Value {
	let document = SchemaGenerator::new()
		.title("Food API")
		.version("1.0.0")
		.url("https://food.example.com")
		.generate(&food_endpoints())
		.unwrap()
		.unwrap();
	let json = OpenApiRenderer::new().to_json(&document).unwrap();
	serde_json::from_str(&json).expect("Invalid JSON")
}

#[test]
fn test_info_and_server() {
	let json = rendered();

	assert_eq!(json["openapi"], "3.1.0");
	assert_eq!(json["info"]["title"], "Food API");
	assert_eq!(json["info"]["version"], "1.0.0");
	assert_eq!(json["servers"][0]["url"], "https://food.example.com/api/v1/");
}

#[test]
fn test_paths_are_relative_to_base_path() {
	let json = rendered();
	let paths = json["paths"].as_object().unwrap();

	let mut keys: Vec<&str> = paths.keys().map(String::as_str).collect();
	keys.sort_unstable();
	assert_eq!(keys, vec!["/pizza/", "/pizza/{id}/", "/topping/"]);

	let detail = &paths["/pizza/{id}/"];
	for method in ["get", "put", "patch", "delete"] {
		assert!(detail[method].is_object(), "missing {method}");
	}
	assert_eq!(detail["get"]["parameters"][0]["name"], "id");
	assert_eq!(detail["get"]["parameters"][0]["in"], "path");
	assert_eq!(detail["get"]["operationId"], "retrieve_pizza");
}

#[test]
fn test_responses_reference_components() {
	let json = rendered();

	let list = &json["paths"]["/pizza/"]["get"]["responses"]["200"];
	let schema = &list["content"]["application/json"]["schema"];
	assert_eq!(schema["type"], "array");
	assert_eq!(schema["items"]["$ref"], "#/components/schemas/Pizza_read");

	let create = &json["paths"]["/pizza/"]["post"]["responses"]["201"];
	assert_eq!(
		create["content"]["application/json"]["schema"]["$ref"],
		"#/components/schemas/Pizza_write"
	);

	let destroy = &json["paths"]["/pizza/{id}/"]["delete"]["responses"]["204"];
	assert!(destroy.get("content").is_none());
}

#[test]
fn test_components_hold_definitions() {
	let json = rendered();
	let schemas = &json["components"]["schemas"];

	let read = &schemas["Pizza_read"];
	assert_eq!(read["type"], "object");
	assert!(read["properties"]["id"].is_object());
	assert!(read["properties"].get("secret_sauce").is_none());
	assert!(read["properties"].get("owner").is_none());

	let write = &schemas["Pizza_write"];
	assert!(write["properties"].get("id").is_none());
	assert!(write["properties"]["secret_sauce"].is_object());
	assert_eq!(
		write["required"],
		serde_json::json!(["name", "paid", "secret_sauce"])
	);

	assert!(schemas["Topping_read"].is_object());
}

#[test]
fn test_yaml_output() {
	let document = SchemaGenerator::new()
		.title("Food API")
		.version("1.0.0")
		.generate(&food_endpoints())
		.unwrap()
		.unwrap();
	let yaml = OpenApiRenderer::new().to_yaml(&document).unwrap();

	assert!(yaml.contains("title: Food API"));
	assert!(yaml.contains("Pizza_read"));
	assert!(yaml.contains("url: /api/v1/"));
}

#[test]
fn test_nested_serializer_references_resolve() {
	let endpoints = vec![endpoint(
		"/api/order/",
		Method::POST,
		ActionView::new("create").serializer(OrderSerializer),
	)];
	let document = SchemaGenerator::new()
		.generate(&endpoints)
		.unwrap()
		.unwrap();
	let json: Value =
		serde_json::from_str(&OpenApiRenderer::new().to_json(&document).unwrap()).unwrap();
	let schemas = json["components"]["schemas"].as_object().unwrap();

	let topping = &schemas["Order_write"]["properties"]["topping"]["$ref"];
	assert_eq!(topping, "#/components/schemas/Topping_write");
	let topping = &schemas["Order_read"]["properties"]["topping"]["$ref"];
	assert_eq!(topping, "#/components/schemas/Topping_read");

	for title in ["Order_read", "Order_write", "Topping_read", "Topping_write"] {
		assert!(schemas.contains_key(title), "missing component {}", title);
	}
}
