//! Session Domain Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated session, owned by the token that keys it
#[derive(Debug, Clone)]
pub struct Session {
    /// Stable user identifier; carts and orders are keyed by this, so
    /// token rotation does not orphan them
    pub user_id: String,

    /// Email the user signed in with
    pub email: String,

    /// Display name derived at login
    pub name: String,

    /// When the current token was issued
    pub issued_at: DateTime<Utc>,
}

/// Input for the login endpoint
#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// User fields echoed back to the storefront
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Response for login and renew operations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Envelope flag checked by the storefront
    pub ok: bool,

    /// Token to present in the `x-token` header from now on
    pub token: String,

    /// The authenticated user
    pub user: UserView,
}

/// Response for logout
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub ok: bool,
}
