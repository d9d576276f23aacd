//! Minimal admin page handlers.
//!
//! The dashboard frontend is served separately; these pages exist so the
//! access gate has a surface to protect and somewhere to land redirects.

use axum::response::Html;

/// GET /admin -- the admin dashboard shell. Only reachable with a valid
/// session cookie.
pub async fn admin_dashboard() -> Html<&'static str> {
    Html("<!doctype html><html><head><title>Eutian Admin</title></head><body><h1>Eutian Admin</h1></body></html>")
}

/// GET /admin-login -- the login page shell. Authenticated sessions are
/// redirected to the dashboard before reaching this handler.
pub async fn admin_login() -> Html<&'static str> {
    Html("<!doctype html><html><head><title>Admin Login</title></head><body><h1>Admin Login</h1></body></html>")
}
