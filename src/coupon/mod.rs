//! Coupon Module
//!
//! Voucher codes and the rules for applying them to a cart:
//! - Domain models (Coupon, AppliedDiscount, CouponError)
//! - The built-in coupon table and the validation helper

pub mod helpers;
pub mod models;

// Re-export commonly used items for convenience
pub use helpers::{apply_coupon, normalize_code, sample_coupons};
pub use models::{AppliedDiscount, Coupon, CouponError, CouponKind};
