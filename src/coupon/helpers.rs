//! Coupon Application Rules
//!
//! Code normalization, the built-in voucher table and the validation
//! routine that turns a submitted code into discount inputs.

use super::models::{AppliedDiscount, Coupon, CouponError, CouponKind};
use std::collections::HashMap;

/// Trims surrounding whitespace and upper-cases a submitted coupon code.
///
/// Codes are matched case-insensitively, so `" descuento10 "` and
/// `"DESCUENTO10"` resolve to the same table entry.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Builds the built-in coupon table, keyed by normalized code.
///
/// The storefront ships with four sample vouchers. The table is plain data
/// handed to [`apply_coupon`], so a backend-supplied table can replace it
/// without touching the validation rules.
pub fn sample_coupons() -> HashMap<String, Coupon> {
    let coupons = [
        Coupon {
            code: "DESCUENTO10".to_string(),
            kind: CouponKind::Percent,
            value: 10.0,
            min_purchase: None,
        },
        Coupon {
            code: "DESCUENTO20".to_string(),
            kind: CouponKind::Percent,
            value: 20.0,
            min_purchase: Some(200.0),
        },
        Coupon {
            code: "AHORRA50".to_string(),
            kind: CouponKind::Fixed,
            value: 50.0,
            min_purchase: Some(300.0),
        },
        Coupon {
            code: "BIENVENIDA25".to_string(),
            kind: CouponKind::Fixed,
            value: 25.0,
            min_purchase: Some(100.0),
        },
    ];

    coupons
        .into_iter()
        .map(|coupon| (coupon.code.clone(), coupon))
        .collect()
}

/// Validates a submitted code against the table and the current subtotal.
///
/// Checks run in a fixed order:
/// 1. blank code (after trimming) is rejected;
/// 2. a cart may hold at most one active coupon, so a second application
///    is rejected until the first is removed;
/// 3. the normalized code must exist in the table;
/// 4. the subtotal must meet the coupon's minimum purchase, when set.
///
/// On success the returned [`AppliedDiscount`] carries the percentage for
/// `Percent` coupons or the flat amount for `Fixed` ones, never both.
pub fn apply_coupon(
    code: &str,
    subtotal: f64,
    has_active_coupon: bool,
    table: &HashMap<String, Coupon>,
) -> Result<AppliedDiscount, CouponError> {
    let normalized = normalize_code(code);
    if normalized.is_empty() {
        return Err(CouponError::Empty);
    }

    if has_active_coupon {
        return Err(CouponError::AlreadyApplied);
    }

    let coupon = table.get(&normalized).ok_or(CouponError::NotFound)?;

    if let Some(min_purchase) = coupon.min_purchase {
        if subtotal < min_purchase {
            return Err(CouponError::BelowMinimum(min_purchase));
        }
    }

    Ok(match coupon.kind {
        CouponKind::Percent => AppliedDiscount {
            discount_amount: 0.0,
            discount_percent: coupon.value,
        },
        CouponKind::Fixed => AppliedDiscount {
            discount_amount: coupon.value,
            discount_percent: 0.0,
        },
    })
}
