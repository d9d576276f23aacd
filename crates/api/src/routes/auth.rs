//! Route definitions for the `/api/auth` resource.

use axum::response::Response;
use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::response;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /login -> login
/// ```
///
/// There is no logout endpoint: the session is a static token and the
/// client simply drops the cookie.
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(auth::login).fallback(method_not_allowed))
}

async fn method_not_allowed() -> Response {
    response::method_not_allowed(&["POST"])
}
