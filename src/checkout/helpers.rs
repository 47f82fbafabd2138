//! Checkout Business Logic Helpers
//!
//! Shipping validation as an explicit command-style function returning an
//! error value, so handlers decide how to surface failures.

use super::models::ShippingDetails;
use crate::cart::helpers::format_line_summary;
use crate::cart::models::CartLine;
use crate::error::{ApiError, ApiResult};
use crate::format::currency_format;

/// Validates shipping details, reporting the first failing field.
///
/// Mirrors the storefront's checkout form rules: name, phone, address,
/// city and province must be non-blank and the email needs an `@`.
pub fn validate_shipping(shipping: &ShippingDetails) -> ApiResult<()> {
    if shipping.name.trim().is_empty() {
        return Err(ApiError::Validation("enter your full name".to_string()));
    }
    if shipping.email.trim().is_empty() || !shipping.email.contains('@') {
        return Err(ApiError::Validation("enter a valid email".to_string()));
    }
    if shipping.phone.trim().is_empty() {
        return Err(ApiError::Validation("enter your phone number".to_string()));
    }
    if shipping.address.trim().is_empty() {
        return Err(ApiError::Validation("enter your address".to_string()));
    }
    if shipping.city.trim().is_empty() {
        return Err(ApiError::Validation("select a city".to_string()));
    }
    if shipping.province.trim().is_empty() {
        return Err(ApiError::Validation("select a province".to_string()));
    }
    Ok(())
}

/// One-line receipt for the order log, e.g.
/// `"2x Teclado, 1x Mouse = $260.00"`.
pub fn format_receipt(lines: &[CartLine], total: f64) -> String {
    format!("{} = {}", format_line_summary(lines), currency_format(total))
}
