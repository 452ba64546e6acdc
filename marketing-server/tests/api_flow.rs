//! End-to-end HTTP flows against the in-process router

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use marketing_server::core::{Config, MissingReferencePolicy};
use marketing_server::{ServerState, api};

fn app_with(config: Config) -> Router {
    let state = ServerState::initialize(&config).unwrap();
    api::build_app().with_state(state)
}

fn app() -> Router {
    app_with(Config::for_tests())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_reports_connected() {
    let (status, body) = send(&app(), Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["connected"], true);
    assert_eq!(body["data"]["generator"], "fixture");
}

#[tokio::test]
async fn profile_update_is_visible_to_later_reads() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/restaurants/user-1/profile",
        Some(json!({"name": "New Name"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "New Name");
    assert_eq!(body["data"]["cuisine_type"], "Italian");

    let (_, body) = send(&app, Method::GET, "/api/restaurants/user-1/profile", None).await;
    assert_eq!(body["data"]["name"], "New Name");
}

#[tokio::test]
async fn created_menu_item_is_listed_in_its_category() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/menu/categories/cat-1/items",
        Some(json!({"name": "Olives", "price": 9.99})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("item-"));
    assert_eq!(body["data"]["price"], 9.99);

    let (_, body) = send(&app, Method::GET, "/api/menu/items?category_id=cat-1", None).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items.iter().any(|i| i["id"] == id.as_str()));
}

#[tokio::test]
async fn missing_category_is_ignored_or_rejected_by_policy() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/menu/categories/cat-404/items",
        Some(json!({"name": "Ghost", "price": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["data"].is_null());

    let (_, body) = send(&app, Method::GET, "/api/menu/items", None).await;
    let items = body["data"].as_array().unwrap();
    assert!(items.iter().all(|i| i["name"] != "Ghost"));

    let mut config = Config::for_tests();
    config.missing_reference_policy = MissingReferencePolicy::Reject;
    let (status, body) = send(
        &app_with(config),
        Method::POST,
        "/api/menu/categories/cat-404/items",
        Some(json!({"name": "Ghost", "price": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["details"]["id"], "cat-404");
}

#[tokio::test]
async fn updating_unknown_item_returns_null_data() {
    let (status, body) = send(
        &app(),
        Method::PUT,
        "/api/menu/items/item-404",
        Some(json!({"price": 12})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn negative_price_is_rejected() {
    let (status, body) = send(
        &app(),
        Method::PUT,
        "/api/menu/items/item-3",
        Some(json!({"price": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn unknown_customer_uses_error_envelope() {
    let (status, body) = send(&app(), Method::GET, "/api/customers/cust-404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "success": false,
            "data": null,
            "error": "Customer not found",
            "code": 2001,
            "details": {"id": "cust-404"}
        })
    );
}

#[tokio::test]
async fn validation_errors_list_field_reasons() {
    let (status, body) = send(
        &app(),
        Method::PUT,
        "/api/restaurants/user-1/profile",
        Some(json!({"email": "nope", "name": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert_eq!(body["error"], "Invalid fields: email, name");
    assert_eq!(body["details"]["email"][0], "must be a valid email address");
    assert_eq!(body["details"]["name"][0], "must be 1-200 characters");
}

#[tokio::test]
async fn full_menu_save_checks_items_and_category_ids() {
    let app = app();
    let (_, body) = send(&app, Method::GET, "/api/menu", None).await;
    let original = body["data"].clone();

    let mut menu = original.clone();
    menu["categories"][0]["items"][0]["spice_level"] = json!(9);
    let (status, body) = send(&app, Method::PUT, "/api/menu", Some(menu)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["id"], "item-1");

    let mut menu = original;
    menu["categories"][0]["items"][0]["category_id"] = json!("cat-999");
    let (status, _) = send(&app, Method::PUT, "/api/menu", Some(menu)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/api/menu/items?category_id=cat-1", None).await;
    let first = &body["data"][0];
    assert_eq!(first["id"], "item-1");
    assert_eq!(first["category_id"], "cat-1");
    assert_eq!(first["spice_level"], 0);
}

#[tokio::test]
async fn review_response_and_summary() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/reviews/review-2/response",
        Some(json!({"text": "Thanks Dave!"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["response"]["text"], "Thanks Dave!");

    let (_, body) = send(&app, Method::GET, "/api/reviews", None).await;
    let reviews = body["data"].as_array().unwrap();
    assert_eq!(reviews[1]["id"], "review-2");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/reviews",
        Some(json!({"author": "Eve", "rating": 9, "platform": "google"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3002);

    let (status, body) = send(&app, Method::GET, "/api/reviews/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_reviews"], 5);
}

#[tokio::test]
async fn generate_then_apply_content() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/content/generate",
        Some(json!({"content_type": "promotions", "params": {"discount_percent": 20}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["status"], "generated");

    let (_, body) = send(&app, Method::GET, "/api/content", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let uri = format!("/api/content/{id}/apply");
    let (_, first) = send(&app, Method::POST, &uri, None).await;
    let (_, second) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(first["data"]["status"], "applied");
    assert_eq!(first["data"], second["data"]);
}

#[tokio::test]
async fn unsupported_content_type_is_rejected() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/content/generate",
        Some(json!({"content_type": "haiku"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5001);
}

#[tokio::test]
async fn malformed_json_is_an_invalid_format_error() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/customers")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 6);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let request = Request::builder()
        .uri("/api/campaigns")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn analytics_snapshot_endpoints() {
    let app = app();
    for uri in ["/api/analytics", "/api/analytics/customers", "/api/analytics/revenue"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["success"], true);
        assert!(body["data"].is_object());
    }
}
