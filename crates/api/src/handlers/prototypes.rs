//! Handlers for the `/api/prototypes` resource.
//!
//! Prototypes are portfolio entries: created and edited from the admin
//! dashboard, publicly readable on the gallery page.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use eutian_core::error::CoreError;
use eutian_core::prototype::string_labels;
use eutian_core::validate::require_str;
use eutian_db::models::prototype::{CreatePrototype, PrototypeDocument, UpdatePrototype};
use eutian_db::repositories::PrototypeRepo;

use crate::error::{AppError, AppResult};
use crate::query::{DeleteBody, DeleteParams};
use crate::response::{CreatedResponse, DeletedResponse, ItemsResponse, ModifiedResponse};
use crate::state::AppState;

/// POST /api/prototypes
///
/// Add a portfolio entry. Title, image, category and description are
/// required; the label lists are coerced to empty when absent or not
/// list-shaped.
pub async fn create_prototype(
    State(state): State<AppState>,
    Json(input): Json<CreatePrototype>,
) -> AppResult<impl IntoResponse> {
    let title = require_str("title", input.title.as_deref())?;
    let image = require_str("image", input.image.as_deref())?;
    let category = require_str("category", input.category.as_deref())?;
    let description = require_str("description", input.description.as_deref())?;

    let document = PrototypeDocument {
        id: None,
        title,
        image,
        category,
        description,
        tech_stack: string_labels(input.tech_stack.as_ref()),
        features: string_labels(input.features.as_ref()),
        created_at: Utc::now(),
    };

    let id = PrototypeRepo::create(&state.store, document).await?;

    tracing::info!(prototype_id = %id, "Prototype created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { ok: true, id })))
}

/// GET /api/prototypes
///
/// List all prototypes, newest first.
pub async fn list_prototypes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = PrototypeRepo::list(&state.store).await?;
    Ok(Json(ItemsResponse { ok: true, items }))
}

/// PATCH /api/prototypes
///
/// Partially update a prototype: only the fields present in the request
/// are applied.
pub async fn update_prototype(
    State(state): State<AppState>,
    Json(input): Json<UpdatePrototype>,
) -> AppResult<impl IntoResponse> {
    let id = input
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Missing id".into())))?;

    let id = super::parse_object_id(id)?;
    let modified_count = PrototypeRepo::update(&state.store, id, &input).await?;

    tracing::info!(prototype_id = %id, modified_count, "Prototype updated");

    Ok(Json(ModifiedResponse {
        ok: true,
        modified_count,
    }))
}

/// DELETE /api/prototypes?id= (or `{ "id": ... }` body)
pub async fn delete_prototype(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
    body: Option<Json<DeleteBody>>,
) -> AppResult<impl IntoResponse> {
    let id = super::delete_id(params, body)?;
    let deleted_count = PrototypeRepo::delete(&state.store, id).await?;

    tracing::info!(prototype_id = %id, deleted_count, "Prototype deleted");

    Ok(Json(DeletedResponse {
        ok: true,
        deleted_count,
    }))
}
