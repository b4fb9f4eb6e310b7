//! # Integration Tests for prismo-api
//!
//! Drives the assembled router with `oneshot`: health probes, post
//! validation, constraint listing, metrics, and the OpenAPI document.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use prismo_api::state::{AppConfig, AppState};
use prismo_core::{ConstraintTable, SocialPlatform};

/// Helper: build the test app with the built-in constraint table.
fn test_app() -> axum::Router {
    prismo_api::app(AppState::new())
}

/// Helper: read response body as string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn validate_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/posts/validate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app().oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app().oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

/// Helper: app whose table has no TikTok record.
fn app_without_tiktok() -> axum::Router {
    let standard = ConstraintTable::standard();
    let partial = ConstraintTable::from_entries(
        standard
            .iter()
            .filter(|(p, _)| *p != SocialPlatform::Tiktok)
            .map(|(p, r)| (p, r.clone())),
    )
    .unwrap();
    prismo_api::app(AppState::with_table(AppConfig::default(), partial))
}

#[tokio::test]
async fn test_readiness_fails_for_partial_table() {
    let app = app_without_tiktok();

    let response = app.oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(body_string(response).await.contains("TIKTOK"));
}

#[tokio::test]
async fn test_health_status_document() {
    let response = test_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["services"]["validator"], "up");
    assert_eq!(body["services"]["api"], "up");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_is_unavailable_for_partial_table() {
    let response = app_without_tiktok().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["validator"], "degraded");
    assert_eq!(body["services"]["api"], "up");
}

// -- Post Validation ----------------------------------------------------------

#[tokio::test]
async fn test_twitter_text_over_limit_is_invalid() {
    let request = json!({
        "content": { "text": "a".repeat(281) },
        "platforms": ["TWITTER"]
    });
    let response = test_app().oneshot(validate_request(&request)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["outcomes"][0]["platform"], "TWITTER");
    assert_eq!(
        body["outcomes"][0]["errors"][0],
        "Twitter posts cannot exceed 280 characters"
    );
}

#[tokio::test]
async fn test_valid_post_for_permissive_platforms() {
    let request = json!({
        "content": {
            "text": "Launch day",
            "media": [{
                "url": "https://cdn.example.com/launch.jpg",
                "type": "image",
                "filename": "launch.jpg",
                "size": 2048
            }]
        },
        "platforms": ["TWITTER", "FACEBOOK", "INSTAGRAM"]
    });
    let response = test_app().oneshot(validate_request(&request)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["outcomes"], json!([]));
}

#[tokio::test]
async fn test_outcomes_follow_request_order() {
    let request = json!({
        "content": { "text": "no media here" },
        "platforms": ["TIKTOK", "TWITTER", "INSTAGRAM"]
    });
    let response = test_app().oneshot(validate_request(&request)).await.unwrap();
    let body = body_json(response).await;

    let platforms: Vec<&str> = body["outcomes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["platform"].as_str().unwrap())
        .collect();
    assert_eq!(platforms, ["TIKTOK", "INSTAGRAM"]);
}

#[tokio::test]
async fn test_empty_platforms_is_rejected() {
    let request = json!({ "content": { "text": "hello" }, "platforms": [] });
    let response = test_app().oneshot(validate_request(&request)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"][0]["field"], "platforms");
    assert_eq!(
        body["error"]["details"][0]["message"],
        "At least one platform required"
    );
}

#[tokio::test]
async fn test_unknown_platform_is_rejected() {
    let request = json!({ "content": { "text": "hello" }, "platforms": ["MYSPACE"] });
    let response = test_app().oneshot(validate_request(&request)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_lowercase_platforms_are_accepted() {
    let request = json!({ "content": { "text": "hello" }, "platforms": ["twitter", "linkedin"] });
    let response = test_app().oneshot(validate_request(&request)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["valid"], true);
}

#[tokio::test]
async fn test_invalid_media_fields_are_reported_by_path() {
    let request = json!({
        "content": {
            "text": "hello",
            "media": [{ "url": "not a url", "type": "image", "filename": "", "size": 0 }]
        },
        "platforms": ["TWITTER"]
    });
    let response = test_app().oneshot(validate_request(&request)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    let fields: Vec<&str> = body["error"]["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        [
            "content.media[0].filename",
            "content.media[0].size",
            "content.media[0].url"
        ]
    );
}

// -- Constraints --------------------------------------------------------------

#[tokio::test]
async fn test_constraints_listing() {
    let response = test_app()
        .oneshot(get("/v1/platforms/constraints"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["TWITTER"]["maxTextLength"], 280);
    assert_eq!(body["TIKTOK"]["maxMediaCount"], 1);
    assert_eq!(body["INSTAGRAM"]["requiresMedia"], true);
    assert_eq!(body.as_object().unwrap().len(), 5);
}

// -- Metrics ------------------------------------------------------------------

#[tokio::test]
async fn test_metrics_record_validation_results() {
    let app = test_app();
    let request = json!({
        "content": { "text": "caption only" },
        "platforms": ["INSTAGRAM"]
    });
    let response = app
        .clone()
        .oneshot(validate_request(&request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let text = body_string(response).await;
    assert!(text.contains("prismo_post_validations_total{result=\"invalid\"} 1"));
    assert!(text.contains("prismo_platform_violations_total{platform=\"INSTAGRAM\"} 1"));
    assert!(text.contains("prismo_http_requests_total"));
}

#[tokio::test]
async fn test_metrics_label_by_route_template() {
    let app = test_app();
    for i in 0..5 {
        let response = app
            .clone()
            .oneshot(get(&format!("/scan/{i}/admin.php")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
    for _ in 0..2 {
        app.clone().oneshot(get("/health/liveness")).await.unwrap();
    }

    let response = app.oneshot(get("/metrics")).await.unwrap();
    let text = body_string(response).await;
    assert!(!text.contains("/scan/"));
    assert!(text.contains(
        "prismo_http_requests_total{method=\"GET\",path=\"/health/liveness\",status=\"200\"} 2"
    ));
}

#[tokio::test]
async fn test_metrics_disabled_hides_endpoint() {
    let config = AppConfig {
        metrics_enabled: false,
        ..AppConfig::default()
    };
    let app = prismo_api::app(AppState::with_table(config, ConstraintTable::standard()));
    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn test_openapi_document_served() {
    let response = test_app().oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/v1/posts/validate"].is_object());
}
