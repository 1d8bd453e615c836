/// Integration tests for the pricing HTTP API
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use infra_cost::{
    config::Config,
    handlers::calculate::AppState,
    pricing::{CostCalculator, PriceTable},
    server::create_router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(config: &Config) -> Router {
    let state = AppState {
        calculator: Arc::new(CostCalculator::new(Arc::new(PriceTable::standard()))),
    };
    create_router(config, state, None)
}

fn app() -> Router {
    app_with(&Config::default())
}

async fn post_calculate(body: Body, json_content_type: bool) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri("/api/calculate");
    if json_content_type {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }

    let response = app().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn calculate(body: Value) -> (StatusCode, Value) {
    post_calculate(Body::from(body.to_string()), true).await
}

#[tokio::test]
async fn test_empty_request_costs_nothing() {
    let (status, body) = calculate(json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "totalCost": 0.0, "breakdown": {} }));
}

#[tokio::test]
async fn test_explicit_zero_quantities() {
    let (status, body) = calculate(json!({
        "vmType": "large", "vmCount": 0,
        "dbType": "performant", "dbCount": 0,
        "storageType": "ssd", "storageGB": 0,
        "bandwidthGB": 0
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCost"], 0.0);
    assert_eq!(body["breakdown"], json!({}));
}

#[tokio::test]
async fn test_small_vms() {
    let (status, body) = calculate(json!({ "vmType": "small", "vmCount": 3 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["breakdown"]["vms"]["cost"], 150.0);
    assert_eq!(body["breakdown"]["vms"]["label"], "VMs (3 x small)");
    assert_eq!(body["breakdown"]["vms"]["details"], "2 vCPU, 4 GB RAM each");
    assert_eq!(body["totalCost"], 150.0);
}

#[tokio::test]
async fn test_default_tiers_apply() {
    let (_, body) = calculate(json!({ "vmCount": 1, "dbCount": 2 })).await;

    assert_eq!(body["breakdown"]["vms"]["label"], "VMs (1 x medium)");
    assert_eq!(body["breakdown"]["vms"]["cost"], 100.0);
    assert_eq!(body["breakdown"]["databases"]["label"], "Databases (2 x standard)");
    assert_eq!(body["breakdown"]["databases"]["cost"], 160.0);
    assert_eq!(body["breakdown"]["databases"]["details"], "~100 GB Storage each");
    assert_eq!(body["totalCost"], 260.0);
}

#[tokio::test]
async fn test_unknown_tier_is_skipped() {
    let (status, body) = calculate(json!({
        "vmType": "xlarge", "vmCount": 5,
        "storageType": "tape", "storageGB": 100,
        "bandwidthGB": 10
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let breakdown = body["breakdown"].as_object().unwrap();
    assert!(!breakdown.contains_key("vms"));
    assert!(!breakdown.contains_key("storage"));
    assert!(breakdown.contains_key("bandwidth"));
    assert_eq!(body["totalCost"], body["breakdown"]["bandwidth"]["cost"]);
}

#[tokio::test]
async fn test_one_gigabyte_of_storage_is_listed() {
    let (_, body) = calculate(json!({ "storageGB": 1 })).await;

    assert_eq!(body["breakdown"]["storage"]["cost"], 0.02);
    assert_eq!(body["breakdown"]["storage"]["details"], "$0.02/GB/Month");
    assert_eq!(body["totalCost"], 0.02);
}

#[tokio::test]
async fn test_same_request_same_answer() {
    let request = json!({ "vmCount": 2, "dbType": "performant", "dbCount": 1, "bandwidthGB": 75 });

    let first = calculate(request.clone()).await;
    let second = calculate(request).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (status, body) = post_calculate(Body::from("{not json"), true).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid input" }));
}

#[tokio::test]
async fn test_missing_body_is_bad_request() {
    let (status, body) = post_calculate(Body::empty(), false).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input");
}

#[tokio::test]
async fn test_non_object_body_is_bad_request() {
    let (status, _) = calculate(json!(null)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = calculate(json!([1, 2, 3])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_field_type_is_bad_request() {
    let (status, body) = calculate(json!({ "vmCount": "lots" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input");
}

#[tokio::test]
async fn test_negative_quantity_is_rejected() {
    let (status, body) = calculate(json!({ "storageGB": -10 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "storageGB must be a non-negative number, got -10");
}

#[tokio::test]
async fn test_whole_float_count_is_priced() {
    let (status, body) = calculate(json!({ "vmType": "small", "vmCount": 2.0 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["breakdown"]["vms"]["label"], "VMs (2 x small)");
    assert_eq!(body["totalCost"], 100.0);
}

#[tokio::test]
async fn test_fractional_count_is_rejected() {
    let (status, body) = calculate(json!({ "vmType": "small", "vmCount": 1.5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "vmCount must be a whole number, got 1.5");

    let (status, body) = calculate(json!({ "dbCount": 2.5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "dbCount must be a whole number, got 2.5");
}

#[tokio::test]
async fn test_oversized_body_is_bad_request() {
    let mut config = Config::default();
    config.server.body_limit_bytes = 16;

    let body = json!({ "vmType": "small", "vmCount": 3, "bandwidthGB": 100 }).to_string();
    assert!(body.len() > 16);

    let request = Request::builder()
        .method("POST")
        .uri("/api/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = app_with(&config).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Invalid input" }));
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/calculate")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cors_header_on_calculate_response() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/calculate")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_prices_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/api/prices").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["vm"]["small"]["costPerMonth"], 50.0);
    assert_eq!(body["bandwidth"]["costPerGB"], 0.09);
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_ready_endpoint_reports_tiers() {
    let response = app()
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["tiers"]["vm"], 3);
}

#[tokio::test]
async fn test_metrics_route_absent_without_handle() {
    let response = app()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
