//! Handlers for the `/api/reviews` resource.
//!
//! Reviews are visitor-submitted testimonials with a 1-5 rating. The
//! public board sees only visible reviews; the admin dashboard lists all
//! of them via `?all=1`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use eutian_core::error::CoreError;
use eutian_core::review;
use eutian_core::validate::require_str;
use eutian_db::models::review::{CreateReview, ReviewDocument, UpdateReviewStatus};
use eutian_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::query::{DeleteBody, DeleteParams, ListReviewsParams};
use crate::response::{CreatedResponse, DeletedResponse, ItemsResponse, ModifiedResponse};
use crate::state::AppState;

/// POST /api/reviews
///
/// Submit a testimonial. Name, message and a numeric rating are required;
/// the rating is rounded and clamped into [1, 5], never rejected for
/// being out of range.
pub async fn create_review(
    State(state): State<AppState>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    let name = require_str("name", input.name.as_deref())?;
    let message = require_str("message", input.message.as_deref())?;
    let rating = input.rating.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Missing required field: rating".into()))
    })?;

    let document = ReviewDocument {
        id: None,
        name,
        email: input.email,
        rating: review::clamp_rating(rating),
        message,
        status: review::STATUS_VISIBLE.to_string(),
        created_at: Utc::now(),
    };

    let id = ReviewRepo::create(&state.store, document).await?;

    tracing::info!(review_id = %id, "Review submitted");

    Ok((StatusCode::CREATED, Json(CreatedResponse { ok: true, id })))
}

/// GET /api/reviews[?all=1|true]
///
/// List reviews, newest first, capped at 200. Hidden reviews are excluded
/// unless the `all` flag is set.
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<ListReviewsParams>,
) -> AppResult<impl IntoResponse> {
    let items = ReviewRepo::list(&state.store, params.include_hidden()).await?;
    Ok(Json(ItemsResponse { ok: true, items }))
}

/// PATCH /api/reviews
///
/// Toggle a review between visible and hidden.
pub async fn update_review_status(
    State(state): State<AppState>,
    Json(input): Json<UpdateReviewStatus>,
) -> AppResult<impl IntoResponse> {
    let (id, status) = match (input.id.as_deref(), input.status.as_deref()) {
        (Some(id), Some(status)) if !id.is_empty() && !status.is_empty() => (id, status),
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Missing id or status".into(),
            )))
        }
    };
    review::validate_status(status)?;

    let id = super::parse_object_id(id)?;
    let modified_count = ReviewRepo::update_status(&state.store, id, status).await?;

    tracing::info!(review_id = %id, status, modified_count, "Review status updated");

    Ok(Json(ModifiedResponse {
        ok: true,
        modified_count,
    }))
}

/// DELETE /api/reviews?id= (or `{ "id": ... }` body)
pub async fn delete_review(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
    body: Option<Json<DeleteBody>>,
) -> AppResult<impl IntoResponse> {
    let id = super::delete_id(params, body)?;
    let deleted_count = ReviewRepo::delete(&state.store, id).await?;

    tracing::info!(review_id = %id, deleted_count, "Review deleted");

    Ok(Json(DeletedResponse {
        ok: true,
        deleted_count,
    }))
}
