//! REST API handlers for shopping cart operations
//!
//! This module implements the HTTP endpoints the storefront's cart and
//! checkout summary screens call. Every handler resolves the caller's
//! session first and answers with the full cart view so the UI can render
//! the recomputed totals without a second request.

use super::{helpers::*, models::*, state::SharedState};
use crate::coupon::{apply_coupon, normalize_code};
use crate::error::{ApiError, ApiResult};
use crate::session::helpers::resolve_session;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post, put},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/cart", get(get_cart))
        .route("/api/cart/items", post(add_items))
        .route(
            "/api/cart/items/:product_id",
            put(update_quantity).delete(remove_item),
        )
        .route(
            "/api/cart/coupon",
            post(apply_cart_coupon).delete(remove_cart_coupon),
        )
}

/// Endpoint: GET /api/cart
/// Returns the caller's cart with a freshly derived summary.
async fn get_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> ApiResult<Json<CartView>> {
    let session = resolve_session(&state, &headers)?;
    let cart = state.carts.entry(session.user_id).or_default();

    Ok(Json(cart_view(&cart)))
}

/// Endpoint: POST /api/cart/items
/// Adds lines to the cart, aggregating quantities for known products.
async fn add_items(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<AddItemsInput>,
) -> ApiResult<Json<CartView>> {
    let session = resolve_session(&state, &headers)?;

    let mut cart = state.carts.entry(session.user_id).or_default();
    merge_lines(&mut cart.lines, payload.items);

    Ok(Json(cart_view(&cart)))
}

/// Endpoint: PUT /api/cart/items/{product_id}
/// Sets the quantity of an existing line.
async fn update_quantity(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(product_id): Path<String>,
    Json(payload): Json<UpdateQuantityInput>,
) -> ApiResult<Json<CartView>> {
    let session = resolve_session(&state, &headers)?;

    if payload.quantity == 0 {
        return Err(ApiError::Validation(
            "quantity must be at least 1".to_string(),
        ));
    }

    let mut cart = state.carts.entry(session.user_id).or_default();
    let line = cart
        .lines
        .iter_mut()
        .find(|line| line.product_id == product_id)
        .ok_or_else(|| ApiError::NotFound("cart item".to_string()))?;
    line.quantity = payload.quantity;

    Ok(Json(cart_view(&cart)))
}

/// Endpoint: DELETE /api/cart/items/{product_id}
/// Removes a line from the cart.
async fn remove_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(product_id): Path<String>,
) -> ApiResult<Json<CartView>> {
    let session = resolve_session(&state, &headers)?;

    let mut cart = state.carts.entry(session.user_id).or_default();
    let before = cart.lines.len();
    cart.lines.retain(|line| line.product_id != product_id);

    if cart.lines.len() == before {
        return Err(ApiError::NotFound("cart item".to_string()));
    }

    Ok(Json(cart_view(&cart)))
}

/// Endpoint: POST /api/cart/coupon
/// Applies a voucher code to the cart.
///
/// The code is validated against the coupon table and the cart's current
/// subtotal before discounts. On success the coupon participates in every
/// summary derived afterwards.
async fn apply_cart_coupon(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<ApplyCouponInput>,
) -> ApiResult<Json<CartView>> {
    let session = resolve_session(&state, &headers)?;

    let mut cart = state.carts.entry(session.user_id).or_default();
    let subtotal = calculate_subtotal(&cart);

    let discount = apply_coupon(
        &payload.code,
        subtotal,
        cart.coupon.is_some(),
        &state.coupons,
    )?;

    cart.coupon = Some(AppliedCoupon {
        code: normalize_code(&payload.code),
        discount,
    });

    Ok(Json(cart_view(&cart)))
}

/// Endpoint: DELETE /api/cart/coupon
/// Removes the active coupon, resetting both discount inputs to zero.
async fn remove_cart_coupon(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> ApiResult<Json<CartView>> {
    let session = resolve_session(&state, &headers)?;

    let mut cart = state.carts.entry(session.user_id).or_default();
    cart.coupon = None;

    Ok(Json(cart_view(&cart)))
}

/// Subtotal before any discount, used as the coupon qualification base
fn calculate_subtotal(cart: &Cart) -> f64 {
    cart.lines.iter().map(|line| line.line_total()).sum()
}
