use axum::{
	Router,
	body::{self, Body},
	http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::util::ServiceExt;

use stay_api::{routes, state::AppState};
use stay_config::Config;
use stay_storage::Catalog;
use stay_testkit::scenario_listings;

fn scenario_app() -> Router {
	routes::router(AppState::from_catalog(Catalog::new(scenario_listings())))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
	let response = app
		.oneshot(
			Request::builder().uri(uri).body(Body::empty()).expect("Failed to build request."),
		)
		.await
		.expect("Failed to call router.");
	let status = response.status();
	let body = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json = if body.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&body).expect("Failed to parse response.")
	};

	(status, json)
}

fn ids(json: &Value) -> Vec<String> {
	json["list"]
		.as_array()
		.expect("list must be an array.")
		.iter()
		.map(|item| item["id"].as_str().expect("id must be a string.").to_string())
		.collect()
}

#[tokio::test]
async fn health_ok() {
	let (status, _) = get(scenario_app(), "/health").await;

	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn list_without_parameters_returns_everything() {
	let (status, json) = get(scenario_app(), "/list").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(ids(&json), vec!["a", "b"]);
}

#[tokio::test]
async fn list_filters_by_centre() {
	let (status, json) = get(scenario_app(), "/list?centre=5").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(ids(&json), vec!["a"]);
}

#[tokio::test]
async fn list_sorts_by_min_price() {
	let (_, json) = get(scenario_app(), "/list?sorting=MIN_PRICE").await;

	assert_eq!(ids(&json), vec!["b", "a"]);
}

#[tokio::test]
async fn list_tolerates_malformed_and_empty_parameters() {
	let (status, json) =
		get(scenario_app(), "/list?search=&centre=far&minPrice=&minAvgRating=x&sorting=NOPE")
			.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(ids(&json), vec!["a", "b"]);
}

#[tokio::test]
async fn list_repeated_parameter_uses_first_value() {
	let (status, json) = get(scenario_app(), "/list?centre=5&centre=9").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(ids(&json), vec!["a"]);
}

#[tokio::test]
async fn suggestions_and_details_tolerate_repeated_parameters() {
	let (status, json) = get(scenario_app(), "/suggestions?search=Budget&search=Grand").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json, serde_json::json!({ "suggestions": [{ "label": "Budget Inn" }] }));

	let (status, json) = get(scenario_app(), "/details?id=a&id=b").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["data"]["id"], "a");
}

#[tokio::test]
async fn list_combines_filters() {
	let (_, json) =
		get(scenario_app(), "/list?search=HOTEL&minPrice=100&minAvgRating=5&minReviewsCount=5")
			.await;

	assert_eq!(ids(&json), vec!["a"]);
}

#[tokio::test]
async fn list_item_shape() {
	let (_, json) = get(scenario_app(), "/list?search=Grand").await;
	let item = &json["list"][0];

	assert_eq!(item["title"], "Grand Hotel");
	assert_eq!(item["location"]["centre"], "2 km");
	assert_eq!(item["rating"]["average"], "8");
	assert_eq!(item["rating"]["reviews"], "50");
	assert_eq!(item["price"]["amount"], "500");
	assert_eq!(item["price"]["breakfast"], false);
	assert_eq!(item["demand"], "MEDIUM");
	assert_eq!(item["room"], "DOUBLE");
	assert!(item["cover"]["url"].is_string());
	assert!(item["insights"].is_array());
	assert!(item.get("description").is_none());
	assert!(item.get("images").is_none());
}

#[tokio::test]
async fn suggestions_are_case_sensitive() {
	let (status, json) = get(scenario_app(), "/suggestions?search=Grand").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json, serde_json::json!({ "suggestions": [{ "label": "Grand Hotel" }] }));

	let (_, json) = get(scenario_app(), "/suggestions?search=grand").await;

	assert_eq!(json, serde_json::json!({ "suggestions": [] }));
}

#[tokio::test]
async fn details_returns_record() {
	let (status, json) = get(scenario_app(), "/details?id=b").await;
	let data = &json["data"];

	assert_eq!(status, StatusCode::OK);
	assert_eq!(data["id"], "b");
	assert_eq!(data["title"], "Budget Inn");
	assert_eq!(data["type"], "HOSTEL");
	assert_eq!(data["price"]["amount"], "100");
	assert_eq!(data["rating"]["average"], "5");
	assert!(data["address"].is_string());
	assert!(data["images"].is_array());
	assert!(data["facilities"].is_array());
	assert!(data.get("cover").is_none());
}

#[tokio::test]
async fn details_missing_id_is_not_found() {
	let (status, json) = get(scenario_app(), "/details?id=z").await;

	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(json["error_code"], "NOT_FOUND");
	assert_eq!(json["fields"][0], "$.id");
	assert!(json.get("data").is_none());

	let (status, _) = get(scenario_app(), "/details").await;

	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_allows_any_origin() {
	let response = scenario_app()
		.oneshot(
			Request::builder()
				.uri("/list")
				.header(header::ORIGIN, "http://example.test")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call /list.");

	assert_eq!(response.status(), StatusCode::OK);
	assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn seeded_state_generates_configured_catalog() {
	let mut config = Config::default();

	config.catalog.size = 12;
	config.catalog.seed = Some(5);

	let (_, first) = get(routes::router(AppState::new(&config)), "/list").await;
	let (_, second) = get(routes::router(AppState::new(&config)), "/list").await;

	assert_eq!(ids(&first).len(), 12);
	assert_eq!(first, second);
}

#[test]
fn port_override_replaces_bind_port() {
	let config = Config::default();
	let addr = stay_api::http_addr(&config, Some(8088)).expect("Default bind must parse.");

	assert_eq!(addr.port(), 8088);
	assert_eq!(
		stay_api::http_addr(&config, None).expect("Default bind must parse.").port(),
		5000
	);
}
