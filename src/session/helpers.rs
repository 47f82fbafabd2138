//! Session Business Logic Helpers

use super::models::Session;
use crate::cart::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::http::HeaderMap;
use uuid::Uuid;

/// Name of the header carrying the session token
pub const TOKEN_HEADER: &str = "x-token";

/// Creates a fresh opaque session token.
pub fn issue_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Resolves the caller's session from the `x-token` request header.
///
/// Missing header and unknown token are both `Unauthorized`: the caller
/// cannot distinguish an expired token from a forged one.
pub fn resolve_session(state: &AppState, headers: &HeaderMap) -> ApiResult<Session> {
    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    state
        .sessions
        .get(token)
        .map(|session| session.value().clone())
        .ok_or(ApiError::Unauthorized)
}

/// Derives a display name from the local part of an email address.
///
/// `"maria.lopez@example.com"` becomes `"maria.lopez"`. Good enough for a
/// backend that keeps no user directory.
pub fn display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}
