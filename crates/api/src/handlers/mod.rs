//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers validate input via `eutian_core`, delegate persistence to the
//! repositories in `eutian_db`, and map failures through
//! [`AppError`](crate::error::AppError).

pub mod auth;
pub mod leads;
pub mod pages;
pub mod prototypes;
pub mod reviews;

use axum::Json;
use mongodb::bson::oid::ObjectId;

use eutian_core::error::CoreError;

use crate::error::AppError;
use crate::query::{DeleteBody, DeleteParams};

/// Parse a request-supplied document id, rejecting malformed values as a
/// validation error.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::Core(CoreError::Validation("Invalid id".into())))
}

/// Resolve the target id for a delete request: the query string wins,
/// otherwise the optional JSON body is consulted.
pub(crate) fn delete_id(
    params: DeleteParams,
    body: Option<Json<DeleteBody>>,
) -> Result<ObjectId, AppError> {
    let id = params
        .id
        .or_else(|| body.and_then(|Json(b)| b.id))
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Missing id".into())))?;
    parse_object_id(&id)
}
