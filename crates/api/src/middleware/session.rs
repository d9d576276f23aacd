//! Admin session cookie: issuance helpers and the access gate.
//!
//! The admin surface is protected by a single static token configured via
//! `ADMIN_TOKEN`. The session cookie holds that token verbatim and the
//! gate is a direct equality check: no per-user identity, no expiry, no
//! server-side invalidation. A captured token stays valid until the
//! configured secret changes.

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::state::AppState;

/// Name of the admin session cookie.
pub const SESSION_COOKIE: &str = "admin_session";

/// Session cookie lifetime: one week.
pub const SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;

/// Path serving the admin dashboard.
pub const ADMIN_PATH: &str = "/admin";

/// Path serving the admin login page.
pub const LOGIN_PATH: &str = "/admin-login";

/// Extract the session token from the `Cookie` header, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

/// Build the `Set-Cookie` value issued on a successful login.
pub fn session_cookie_value(token: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_MAX_AGE_SECS}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Access gate for the admin page paths.
///
/// - Admin paths require a session cookie byte-for-byte equal to the
///   configured token; anything else is redirected to the login page.
/// - The login page redirects already-authenticated sessions back to the
///   dashboard and lets everyone else through.
pub async fn admin_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let token = session_token(request.headers());
    let authenticated = token.as_deref() == Some(state.config.admin.expected_token());

    if path.starts_with(LOGIN_PATH) {
        if authenticated {
            return Redirect::temporary(ADMIN_PATH).into_response();
        }
    } else if path.starts_with(ADMIN_PATH) && !authenticated {
        return Redirect::temporary(LOGIN_PATH).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn token_is_extracted_from_cookie_header() {
        let headers = headers_with_cookie("admin_session=secret-token");
        assert_eq!(session_token(&headers).as_deref(), Some("secret-token"));
    }

    #[test]
    fn token_is_found_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; admin_session=secret-token; lang=en");
        assert_eq!(session_token(&headers).as_deref(), Some("secret-token"));
    }

    #[test]
    fn missing_cookie_yields_none() {
        assert_eq!(session_token(&HeaderMap::new()), None);
        let headers = headers_with_cookie("theme=dark");
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn cookie_value_carries_the_expected_attributes() {
        let value = session_cookie_value("tok", false);
        assert!(value.starts_with("admin_session=tok;"));
        assert!(value.contains("Path=/"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Lax"));
        assert!(value.contains("Max-Age=604800"));
        assert!(!value.contains("Secure"));
    }

    #[test]
    fn secure_flag_is_appended_in_production() {
        let value = session_cookie_value("tok", true);
        assert!(value.ends_with("; Secure"));
    }
}
