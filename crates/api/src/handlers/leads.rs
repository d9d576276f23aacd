//! Handlers for the `/api/leads` resource.
//!
//! Leads are contact-form submissions: created by any visitor, listed and
//! managed from the admin dashboard.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use eutian_core::error::CoreError;
use eutian_core::lead::{self, Plan};
use eutian_core::validate::require_str;
use eutian_db::models::lead::{CreateLead, LeadDocument, UpdateLeadStatus};
use eutian_db::repositories::LeadRepo;

use crate::error::{AppError, AppResult};
use crate::query::{DeleteBody, DeleteParams};
use crate::response::{CreatedResponse, DeletedResponse, ItemsResponse, ModifiedResponse};
use crate::state::AppState;

/// POST /api/leads
///
/// Capture a contact-form submission. Name, email, region and message are
/// required; an unknown plan label is dropped rather than rejected.
pub async fn create_lead(
    State(state): State<AppState>,
    Json(input): Json<CreateLead>,
) -> AppResult<impl IntoResponse> {
    let name = require_str("name", input.name.as_deref())?;
    let email = require_str("email", input.email.as_deref())?;
    let region = require_str("region", input.region.as_deref())?;
    let message = require_str("message", input.message.as_deref())?;

    let document = LeadDocument {
        id: None,
        name,
        email,
        phone: input.phone,
        whatsapp: input.whatsapp,
        website_type: input.website_type,
        plan: input.plan.as_deref().and_then(Plan::parse),
        region,
        message,
        status: lead::STATUS_NEW.to_string(),
        created_at: Utc::now(),
    };

    let id = LeadRepo::create(&state.store, document).await?;

    tracing::info!(lead_id = %id, "Lead captured");

    Ok((StatusCode::CREATED, Json(CreatedResponse { ok: true, id })))
}

/// GET /api/leads
///
/// List the 100 most recent leads, newest first.
pub async fn list_leads(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = LeadRepo::list(&state.store).await?;
    Ok(Json(ItemsResponse { ok: true, items }))
}

/// PATCH /api/leads
///
/// Update a lead's status. A modified count of zero means the id matched
/// nothing; that is reported as a count, not an error.
pub async fn update_lead_status(
    State(state): State<AppState>,
    Json(input): Json<UpdateLeadStatus>,
) -> AppResult<impl IntoResponse> {
    let (id, status) = match (input.id.as_deref(), input.status.as_deref()) {
        (Some(id), Some(status)) if !id.is_empty() && !status.is_empty() => (id, status),
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Missing id or status".into(),
            )))
        }
    };
    lead::validate_status(status)?;

    let id = super::parse_object_id(id)?;
    let modified_count = LeadRepo::update_status(&state.store, id, status).await?;

    tracing::info!(lead_id = %id, status, modified_count, "Lead status updated");

    Ok(Json(ModifiedResponse {
        ok: true,
        modified_count,
    }))
}

/// DELETE /api/leads?id= (or `{ "id": ... }` body)
///
/// Delete a lead. A deleted count of zero means the id matched nothing.
pub async fn delete_lead(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
    body: Option<Json<DeleteBody>>,
) -> AppResult<impl IntoResponse> {
    let id = super::delete_id(params, body)?;
    let deleted_count = LeadRepo::delete(&state.store, id).await?;

    tracing::info!(lead_id = %id, deleted_count, "Lead deleted");

    Ok(Json(DeletedResponse {
        ok: true,
        deleted_count,
    }))
}
