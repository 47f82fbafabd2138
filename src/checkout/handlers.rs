//! REST API handlers for checkout and order tracking
//!
//! Placing an order freezes the cart into an immutable record: the lines,
//! the active coupon and a summary derived once through the shared pricing
//! calculation. The cart (coupon included) is cleared on success.

use super::{helpers::*, models::*};
use crate::cart::helpers::cart_summary;
use crate::cart::state::SharedState;
use crate::error::{ApiError, ApiResult};
use crate::session::helpers::resolve_session;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use uuid::Uuid;

/// Creates routes for checkout-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/orders", post(place_order).get(list_orders))
        .route("/api/orders/:order_id", get(get_order))
}

/// Endpoint: POST /api/orders
/// Places an order from the caller's cart.
///
/// Validation runs before the cart is touched, so a rejected submission
/// leaves the cart (and its coupon) intact.
async fn place_order(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<PlaceOrderInput>,
) -> ApiResult<Json<OrderPlacedResponse>> {
    let session = resolve_session(&state, &headers)?;

    validate_shipping(&payload.shipping)?;

    let has_items = state
        .carts
        .get(&session.user_id)
        .map(|cart| !cart.lines.is_empty())
        .unwrap_or(false);
    if !has_items {
        return Err(ApiError::Validation("your cart is empty".to_string()));
    }

    // All checks passed: take the cart out of the store and freeze it.
    let (_, cart) = state
        .carts
        .remove(&session.user_id)
        .ok_or_else(|| ApiError::Validation("your cart is empty".to_string()))?;

    let summary = cart_summary(&cart);
    let order = Order {
        id: Uuid::new_v4().simple().to_string(),
        user_id: session.user_id,
        placed_at: Utc::now(),
        status: OrderStatus::Pending,
        payment_method: payload.payment_method,
        shipping: payload.shipping,
        coupon: cart.coupon.as_ref().map(|applied| applied.code.clone()),
        summary: summary.clone(),
        items: cart.lines,
    };

    tracing::info!(
        order_id = %order.id,
        receipt = %format_receipt(&order.items, order.summary.total),
        "order placed"
    );

    let response = OrderPlacedResponse {
        ok: true,
        order_id: order.id.clone(),
        summary,
    };
    state.orders.insert(order.id.clone(), order);

    Ok(Json(response))
}

/// Endpoint: GET /api/orders
/// Lists the caller's orders, newest first.
async fn list_orders(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> ApiResult<Json<OrderListResponse>> {
    let session = resolve_session(&state, &headers)?;

    let mut orders: Vec<Order> = state
        .orders
        .iter()
        .filter(|entry| entry.user_id == session.user_id)
        .map(|entry| entry.value().clone())
        .collect();
    orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));

    Ok(Json(OrderListResponse { ok: true, orders }))
}

/// Endpoint: GET /api/orders/{order_id}
/// Returns one order for tracking. Orders belonging to other sessions are
/// indistinguishable from unknown ids.
async fn get_order(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(order_id): Path<String>,
) -> ApiResult<Json<OrderDetailResponse>> {
    let session = resolve_session(&state, &headers)?;

    let order = state
        .orders
        .get(&order_id)
        .filter(|order| order.user_id == session.user_id)
        .map(|order| order.value().clone())
        .ok_or_else(|| ApiError::NotFound("order".to_string()))?;

    Ok(Json(OrderDetailResponse { ok: true, order }))
}
