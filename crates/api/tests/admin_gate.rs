//! Integration tests for the admin access gate: redirect behavior on the
//! `/admin` and `/admin-login` page paths.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{build_test_app, get, TEST_ADMIN_TOKEN};
use tower::ServiceExt;

/// Send a GET request carrying a session cookie.
async fn get_with_cookie(
    app: axum::Router,
    uri: &str,
    cookie: &str,
) -> axum::http::Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

fn location(response: &axum::http::Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Admin path class
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_without_cookie_redirects_to_login() {
    let app = build_test_app().await;
    let response = get(app, "/admin").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/admin-login");
}

#[tokio::test]
async fn admin_with_wrong_token_redirects_to_login() {
    let app = build_test_app().await;
    let response = get_with_cookie(app, "/admin", "admin_session=forged-token").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/admin-login");
}

#[tokio::test]
async fn admin_with_correct_token_passes_through() {
    let app = build_test_app().await;
    let cookie = format!("admin_session={TEST_ADMIN_TOKEN}");
    let response = get_with_cookie(app, "/admin", &cookie).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unrelated_cookies_do_not_authenticate() {
    let app = build_test_app().await;
    let response = get_with_cookie(app, "/admin", "theme=dark; lang=en").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/admin-login");
}

// ---------------------------------------------------------------------------
// Login path class
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_page_with_correct_token_redirects_to_admin() {
    let app = build_test_app().await;
    let cookie = format!("admin_session={TEST_ADMIN_TOKEN}");
    let response = get_with_cookie(app, "/admin-login", &cookie).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/admin");
}

#[tokio::test]
async fn login_page_without_cookie_is_served() {
    let app = build_test_app().await;
    let response = get(app, "/admin-login").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_page_with_wrong_token_is_served() {
    let app = build_test_app().await;
    let response = get_with_cookie(app, "/admin-login", "admin_session=forged-token").await;

    assert_eq!(response.status(), StatusCode::OK);
}
