//! REST API handlers for the authentication token lifecycle
//!
//! Issue, renew and clear live here and nowhere else. The storefront
//! stores the returned token and presents it in the `x-token` header.

use super::{helpers::*, models::*};
use crate::cart::state::SharedState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use uuid::Uuid;

/// Creates routes for session-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/auth", post(login).delete(logout))
        .route("/api/auth/renew", get(renew))
}

/// Endpoint: POST /api/auth
/// Logs a user in and issues a session token.
///
/// This backend keeps no user directory: any syntactically valid email
/// with a non-blank password gets a session, the same way carts exist only
/// in memory.
async fn login(
    State(state): State<SharedState>,
    Json(payload): Json<LoginInput>,
) -> ApiResult<Json<AuthResponse>> {
    let email = payload.email.trim().to_string();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::Validation("enter a valid email".to_string()));
    }
    if payload.password.trim().is_empty() {
        return Err(ApiError::Validation("enter a password".to_string()));
    }

    let session = Session {
        user_id: Uuid::new_v4().simple().to_string(),
        name: display_name(&email),
        email,
        issued_at: Utc::now(),
    };
    let token = issue_token();
    state.sessions.insert(token.clone(), session.clone());

    tracing::info!(user = %session.email, "session issued");

    Ok(Json(auth_response(token, &session)))
}

/// Endpoint: GET /api/auth/renew
/// Rotates the presented token, keeping the same user.
///
/// The old token stops working immediately. Carts and orders are keyed by
/// user id, so nothing else moves.
async fn renew(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> ApiResult<Json<AuthResponse>> {
    let old_token = headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::Unauthorized)?
        .to_string();

    let (_, mut session) = state
        .sessions
        .remove(&old_token)
        .ok_or(ApiError::Unauthorized)?;
    session.issued_at = Utc::now();

    let token = issue_token();
    state.sessions.insert(token.clone(), session.clone());

    Ok(Json(auth_response(token, &session)))
}

/// Endpoint: DELETE /api/auth
/// Logs out: clears the session and drops the user's cart.
async fn logout(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> ApiResult<Json<LogoutResponse>> {
    let session = resolve_session(&state, &headers)?;

    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.sessions.remove(&token);
    state.carts.remove(&session.user_id);

    tracing::info!(user = %session.email, "session cleared");

    Ok(Json(LogoutResponse { ok: true }))
}

/// Builds the auth envelope shared by login and renew
fn auth_response(token: String, session: &Session) -> AuthResponse {
    AuthResponse {
        ok: true,
        token,
        user: UserView {
            id: session.user_id.clone(),
            email: session.email.clone(),
            name: session.name.clone(),
        },
    }
}
