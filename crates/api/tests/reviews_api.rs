//! Integration tests for the `/api/reviews` validation and method
//! contract. All asserted paths fail validation before any store I/O.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, send_empty, send_json};
use serde_json::json;

#[tokio::test]
async fn create_rejects_missing_name_message_or_rating() {
    let cases = [
        json!({ "message": "Great work", "rating": 5 }),
        json!({ "name": "Asha", "rating": 5 }),
        json!({ "name": "Asha", "message": "Great work" }),
    ];

    for body in cases {
        let app = build_test_app().await;
        let response = send_json(app, Method::POST, "/api/reviews", body.clone()).await;

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "body {body} must be rejected"
        );
        let json = body_json(response).await;
        assert_eq!(json["ok"], false);
    }
}

#[tokio::test]
async fn update_status_rejects_values_outside_the_vocabulary() {
    for status in ["archived", "Visible", ""] {
        let app = build_test_app().await;
        let response = send_json(
            app,
            Method::PATCH,
            "/api/reviews",
            json!({ "id": "66f000000000000000000001", "status": status }),
        )
        .await;

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "status '{status}' must be rejected"
        );
    }
}

#[tokio::test]
async fn update_status_rejects_missing_fields() {
    let app = build_test_app().await;
    let response = send_json(app, Method::PATCH, "/api/reviews", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing id or status");
}

#[tokio::test]
async fn delete_rejects_missing_id() {
    let app = build_test_app().await;
    let response = send_empty(app, Method::DELETE, "/api/reviews").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"], "Missing id");
}

#[tokio::test]
async fn unsupported_verb_returns_405_with_allow_header() {
    let app = build_test_app().await;
    let response = send_empty(app, Method::PUT, "/api/reviews").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.headers().get("allow").is_some());
}
