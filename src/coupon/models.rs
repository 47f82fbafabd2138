//! Coupon Domain Models
//!
//! Data structures for voucher codes and their application outcome.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a coupon reduces the subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponKind {
    /// Percentage of the subtotal (value is 0..=100 percentage points)
    Percent,
    /// Flat currency amount
    Fixed,
}

/// A named discount rule.
///
/// Codes are compared case-insensitively: the stored `code` is always the
/// trimmed, upper-cased form produced by [`super::helpers::normalize_code`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Normalized coupon code, unique within the table
    pub code: String,

    /// Discount kind
    pub kind: CouponKind,

    /// Percentage points for `Percent`, currency amount for `Fixed`
    pub value: f64,

    /// Minimum subtotal required for the coupon to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_purchase: Option<f64>,
}

/// Discount inputs produced by a successful coupon application.
///
/// Exactly one of the two fields is ever non-zero. Both feed straight into
/// the order summary calculation, which gives the percentage precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedDiscount {
    /// Flat discount amount (0 for percentage coupons)
    pub discount_amount: f64,

    /// Percentage discount (0 for fixed-amount coupons)
    pub discount_percent: f64,
}

/// Why a coupon could not be applied.
///
/// All variants are recoverable validation outcomes surfaced to the end
/// user. None of them is fatal and there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CouponError {
    /// Submitted code was blank after trimming
    #[error("coupon code is empty")]
    Empty,

    /// The cart already has an active coupon; it must be removed first
    #[error("a coupon is already applied, remove it before applying another")]
    AlreadyApplied,

    /// No coupon with the normalized code exists in the table
    #[error("coupon code not found")]
    NotFound,

    /// The subtotal is below the coupon's minimum purchase threshold
    #[error("this coupon requires a minimum purchase of {0:.2}")]
    BelowMinimum(f64),
}
