//! Order Summary Calculation
//!
//! The one place where subtotal, discount, taxes, shipping and total are
//! derived. Every component that needs a breakdown calls
//! [`calculate_order_summary`] instead of re-deriving the figures inline.

use super::models::{OrderSummary, FREE_SHIPPING_THRESHOLD, SHIPPING_COST, TAX_RATE};
use crate::cart::models::CartLine;

/// Computes the full order breakdown for a list of cart lines.
///
/// `discount_amount` and `discount_percent` are alternatives coming from an
/// applied coupon. When `discount_percent` is greater than zero it takes
/// precedence and `discount_amount` is ignored.
///
/// # Behaviour
///
/// * An empty line list yields an all-zero summary, except shipping (the
///   flat cost still applies) and therefore total.
/// * The discounted subtotal is clamped at zero so an oversized fixed
///   discount can never drive taxes or the total negative.
/// * Negative prices or quantities are a caller contract violation; this
///   function does not guard against them.
pub fn calculate_order_summary(
    lines: &[CartLine],
    discount_amount: f64,
    discount_percent: f64,
) -> OrderSummary {
    let subtotal: f64 = lines.iter().map(|line| line.line_total()).sum();
    let item_count: u32 = lines.iter().map(|line| line.quantity).sum();

    let discount = if discount_percent > 0.0 {
        subtotal * (discount_percent / 100.0)
    } else {
        discount_amount
    };

    let subtotal_after_discount = (subtotal - discount).max(0.0);
    let taxes = subtotal_after_discount * TAX_RATE;

    let shipping = if subtotal_after_discount >= FREE_SHIPPING_THRESHOLD {
        0.0
    } else {
        SHIPPING_COST
    };

    let total = subtotal_after_discount + taxes + shipping;

    OrderSummary {
        subtotal,
        item_count,
        discount,
        subtotal_after_discount,
        taxes,
        shipping,
        total,
    }
}
