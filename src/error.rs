//! API Error Types
//!
//! Unified error type for all REST handlers. Every variant maps to an HTTP
//! status and renders as the `{ "ok": false, "msg": ... }` envelope the
//! storefront expects.

use crate::coupon::CouponError;
use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the REST API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unknown session token
    #[error("authentication required")]
    Unauthorized,

    /// A referenced resource does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Malformed or incomplete input
    #[error("{0}")]
    Validation(String),

    /// A coupon could not be applied
    #[error(transparent)]
    Coupon(#[from] CouponError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Coupon(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "ok": false, "msg": self.to_string() }));
        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
