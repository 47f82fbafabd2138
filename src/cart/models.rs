//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use crate::coupon::AppliedDiscount;
use crate::pricing::OrderSummary;
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for cart lines
fn default_quantity() -> u32 {
    1
}

/// One product line in a cart or order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product identifier, unique within a cart
    pub product_id: String,

    /// Product name as shown to the customer
    pub name: String,

    /// Price per unit in currency units
    pub unit_price: f64,

    /// Quantity of this line (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartLine {
    /// Derived line total: `unit_price * quantity`
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// A coupon currently attached to a cart
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedCoupon {
    /// Normalized code the customer submitted
    pub code: String,

    /// Discount inputs produced when the coupon was validated
    pub discount: AppliedDiscount,
}

/// One customer's cart: the lines plus the optional active coupon.
///
/// At most one coupon is active at a time. The summary is never stored
/// here: it is re-derived from these fields on every read.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    /// Product lines, keyed logically by `product_id`
    pub lines: Vec<CartLine>,

    /// Active coupon, if any
    pub coupon: Option<AppliedCoupon>,
}

// =============================================================================
// Request / Response Models
// =============================================================================

/// Input for adding lines to the cart
#[derive(Debug, Deserialize)]
pub struct AddItemsInput {
    /// Lines to add; duplicates aggregate quantity onto existing lines
    pub items: Vec<CartLine>,
}

/// Input for setting the quantity of an existing line
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityInput {
    /// New quantity, must be at least 1
    pub quantity: u32,
}

/// Input for applying a voucher code
#[derive(Debug, Deserialize)]
pub struct ApplyCouponInput {
    /// Raw code as typed by the customer
    pub code: String,
}

/// Cart state returned by every cart operation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Envelope flag checked by the storefront
    pub ok: bool,

    /// Current product lines
    pub items: Vec<CartLine>,

    /// Normalized code of the active coupon, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,

    /// Freshly recomputed totals breakdown
    pub summary: OrderSummary,
}
