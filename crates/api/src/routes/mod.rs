//! Route definitions.

pub mod auth;
pub mod health;
pub mod leads;
pub mod pages;
pub mod prototypes;
pub mod reviews;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /leads         POST, GET, PATCH, DELETE
/// /prototypes    POST, GET, PATCH, DELETE
/// /reviews       POST, GET, PATCH, DELETE
/// /auth/login    POST
/// ```
///
/// Unsupported verbs on any resource return 405 with an `Allow` header.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/leads", leads::router())
        .nest("/prototypes", prototypes::router())
        .nest("/reviews", reviews::router())
        .nest("/auth", auth::router())
}
