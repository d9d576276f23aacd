//! Route definitions for the `/api/leads` resource.

use axum::response::Response;
use axum::routing::post;
use axum::Router;

use crate::handlers::leads;
use crate::response;
use crate::state::AppState;

/// Lead routes.
///
/// ```text
/// POST   /  -> create_lead
/// GET    /  -> list_leads
/// PATCH  /  -> update_lead_status
/// DELETE /  -> delete_lead
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(leads::create_lead)
            .get(leads::list_leads)
            .patch(leads::update_lead_status)
            .delete(leads::delete_lead)
            .fallback(method_not_allowed),
    )
}

async fn method_not_allowed() -> Response {
    response::method_not_allowed(&["POST", "GET", "PATCH", "DELETE"])
}
