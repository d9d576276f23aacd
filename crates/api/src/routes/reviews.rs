//! Route definitions for the `/api/reviews` resource.

use axum::response::Response;
use axum::routing::post;
use axum::Router;

use crate::handlers::reviews;
use crate::response;
use crate::state::AppState;

/// Review routes.
///
/// ```text
/// POST   /  -> create_review
/// GET    /  -> list_reviews
/// PATCH  /  -> update_review_status
/// DELETE /  -> delete_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(reviews::create_review)
            .get(reviews::list_reviews)
            .patch(reviews::update_review_status)
            .delete(reviews::delete_review)
            .fallback(method_not_allowed),
    )
}

async fn method_not_allowed() -> Response {
    response::method_not_allowed(&["POST", "GET", "PATCH", "DELETE"])
}
