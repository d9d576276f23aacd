//! Route definitions for the `/api/prototypes` resource.

use axum::response::Response;
use axum::routing::get;
use axum::Router;

use crate::handlers::prototypes;
use crate::response;
use crate::state::AppState;

/// Prototype routes.
///
/// ```text
/// GET    /  -> list_prototypes
/// POST   /  -> create_prototype
/// PATCH  /  -> update_prototype
/// DELETE /  -> delete_prototype
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(prototypes::list_prototypes)
            .post(prototypes::create_prototype)
            .patch(prototypes::update_prototype)
            .delete(prototypes::delete_prototype)
            .fallback(method_not_allowed),
    )
}

async fn method_not_allowed() -> Response {
    response::method_not_allowed(&["GET", "POST", "PATCH", "DELETE"])
}
