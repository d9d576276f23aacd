//! Response envelope types shared by all API handlers.
//!
//! Every JSON body carries an `ok` flag: success payloads set it to `true`
//! next to their data, failures pair `false` with a short error message.
//! Use these structs instead of ad-hoc `serde_json::json!` bodies to get
//! compile-time type safety and consistent serialization.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `{ ok: true, id }` — returned by create operations.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub ok: bool,
    pub id: String,
}

/// `{ ok: true, items }` — returned by list operations.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T: Serialize> {
    pub ok: bool,
    pub items: Vec<T>,
}

/// `{ ok: true, modifiedCount }` — returned by partial updates. A count of
/// zero means the id matched nothing; that is a result, not an error.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedResponse {
    pub ok: bool,
    pub modified_count: u64,
}

/// `{ ok: true, deletedCount }` — returned by delete operations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub ok: bool,
    pub deleted_count: u64,
}

/// `{ ok: true }` — returned when there is no payload.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// `{ ok: false, error }` — the failure envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

/// Build a `405 Method Not Allowed` response advertising the supported
/// verbs in the `Allow` header.
pub fn method_not_allowed(allowed: &[&str]) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, allowed.join(", "))],
        Json(ErrorResponse {
            ok: false,
            error: "Method Not Allowed".to_string(),
        }),
    )
        .into_response()
}
