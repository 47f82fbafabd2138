//! Pricing Domain Models
//!
//! Data structures and constants for the order summary breakdown.

use serde::{Deserialize, Serialize};

// =============================================================================
// Pricing Constants
// =============================================================================

/// Tax rate applied to the discounted subtotal (15% IVA).
pub const TAX_RATE: f64 = 0.15;

/// Discounted subtotals at or above this amount ship for free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 500.0;

/// Flat shipping cost charged below the free-shipping threshold.
pub const SHIPPING_COST: f64 = 30.0;

// =============================================================================
// Order Summary
// =============================================================================

/// Derived breakdown of an order's totals.
///
/// A summary is an immutable snapshot: it is recomputed from the cart lines
/// and the active discount on every change and never stored on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Sum of `unit_price * quantity` over all lines
    pub subtotal: f64,

    /// Sum of quantities over all lines
    pub item_count: u32,

    /// Amount subtracted from the subtotal (0 when no coupon is active)
    pub discount: f64,

    /// Subtotal minus discount, clamped at zero
    pub subtotal_after_discount: f64,

    /// Tax on the discounted subtotal
    pub taxes: f64,

    /// Shipping cost (0 above the free-shipping threshold)
    pub shipping: f64,

    /// Final amount: discounted subtotal + taxes + shipping
    pub total: f64,
}
