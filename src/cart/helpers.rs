//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::models::{Cart, CartLine, CartView};
use crate::pricing::{calculate_order_summary, OrderSummary};

/// Merges `new_lines` into `lines`, aggregating quantities for existing
/// entries and inserting brand new ones.
///
/// # Behaviour
///
/// * If a line with the same `product_id` already exists, its `quantity`
///   is increased by the incoming quantity. Name and unit price keep the
///   values of the existing line.
/// * Otherwise the incoming line is appended as-is.
///
/// This function mutates `lines` in-place.
pub fn merge_lines(lines: &mut Vec<CartLine>, new_lines: Vec<CartLine>) {
    for incoming in new_lines {
        if let Some(existing) = lines
            .iter_mut()
            .find(|line| line.product_id == incoming.product_id)
        {
            // Aggregate quantities.
            existing.quantity += incoming.quantity;
        } else {
            // Insert a brand-new line.
            lines.push(incoming);
        }
    }
}

/// Derives the current summary for a cart, feeding the active coupon's
/// discount inputs into the calculation.
pub fn cart_summary(cart: &Cart) -> OrderSummary {
    let discount = cart
        .coupon
        .as_ref()
        .map(|applied| applied.discount)
        .unwrap_or_default();

    calculate_order_summary(&cart.lines, discount.discount_amount, discount.discount_percent)
}

/// Builds the response view for a cart: lines, active coupon code and a
/// freshly recomputed summary.
pub fn cart_view(cart: &Cart) -> CartView {
    CartView {
        ok: true,
        items: cart.lines.clone(),
        coupon: cart.coupon.as_ref().map(|applied| applied.code.clone()),
        summary: cart_summary(cart),
    }
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Teclado, 1x Mouse"`.
pub fn format_line_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{}x {}", line.quantity, line.name))
        .collect::<Vec<_>>()
        .join(", ")
}
