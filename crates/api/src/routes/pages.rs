//! Admin page routes, wrapped in the session gate.

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::middleware::session;
use crate::state::AppState;

/// Routes for `/admin` and `/admin-login`, with the access gate applied.
///
/// The gate needs the state up front (it reads the configured token), so
/// this router takes it as an argument instead of waiting for
/// `with_state`.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(session::ADMIN_PATH, get(pages::admin_dashboard))
        .route(session::LOGIN_PATH, get(pages::admin_login))
        .layer(from_fn_with_state(state, session::admin_gate))
}
