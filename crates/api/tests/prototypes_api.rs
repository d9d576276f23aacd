//! Integration tests for the `/api/prototypes` validation and method
//! contract. All asserted paths fail validation before any store I/O.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, send_empty, send_json};
use serde_json::json;

#[tokio::test]
async fn create_rejects_each_missing_required_field() {
    let full = json!({
        "title": "Storefront",
        "image": "https://example.com/shot.png",
        "category": "E-Commerce",
        "description": "Headless storefront build",
    });

    for field in ["title", "image", "category", "description"] {
        let mut body = full.clone();
        body.as_object_mut().unwrap().remove(field);

        let app = build_test_app().await;
        let response = send_json(app, Method::POST, "/api/prototypes", body).await;

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "missing '{field}' must be rejected"
        );
        let json = body_json(response).await;
        assert_eq!(json["ok"], false);
    }
}

#[tokio::test]
async fn update_rejects_missing_id() {
    let app = build_test_app().await;
    let response = send_json(
        app,
        Method::PATCH,
        "/api/prototypes",
        json!({ "title": "Renamed" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"], "Missing id");
}

#[tokio::test]
async fn update_rejects_malformed_id() {
    let app = build_test_app().await;
    let response = send_json(
        app,
        Method::PATCH,
        "/api/prototypes",
        json!({ "id": "nope", "title": "Renamed" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid id");
}

#[tokio::test]
async fn delete_rejects_missing_id() {
    let app = build_test_app().await;
    let response = send_empty(app, Method::DELETE, "/api/prototypes").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing id");
}

#[tokio::test]
async fn unsupported_verb_returns_405_with_allow_header() {
    let app = build_test_app().await;
    let response = send_empty(app, Method::PUT, "/api/prototypes").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let allow = response
        .headers()
        .get("allow")
        .expect("405 must carry an Allow header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(allow.contains("PATCH"), "Allow should list PATCH, got: {allow}");
}
