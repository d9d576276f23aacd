//! Handlers for the `/api/auth` resource (admin login).

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use eutian_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::session;
use crate::response::OkResponse;
use crate::state::AppState;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /api/auth/login
///
/// Validate the credential pair against the configured admin secrets and
/// issue the static session token as a cookie. Any mismatch -- including
/// missing server configuration -- is reported as the same 401 with no
/// further detail.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let admin = &state.config.admin;

    let token = match (
        non_empty(input.email.as_deref()),
        non_empty(input.password.as_deref()),
        non_empty(admin.email.as_deref()),
        non_empty(admin.password.as_deref()),
        non_empty(admin.session_token.as_deref()),
    ) {
        (Some(email), Some(password), Some(expected_email), Some(expected_password), Some(token))
            if email == expected_email && password == expected_password =>
        {
            token
        }
        _ => {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid credentials".into(),
            )))
        }
    };

    let cookie = session::session_cookie_value(token, state.config.is_production());

    tracing::info!("Admin session issued");

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(OkResponse { ok: true }),
    ))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
