//! Checkout Domain Models

use crate::cart::models::CartLine;
use crate::pricing::OrderSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shipping details submitted with an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    /// Customer's full name
    pub name: String,

    /// Contact email, receives the order confirmation
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Street address
    pub address: String,

    /// Optional reference ("near the park", etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Destination city
    pub city: String,

    /// Destination province
    pub province: String,

    /// Optional postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Placed, awaiting payment confirmation
    Pending,
    /// Payment received
    Paid,
    /// Handed to the carrier
    Shipped,
    /// Received by the customer
    Delivered,
}

/// A placed order: the cart contents frozen at checkout time.
///
/// Unlike a cart summary, an order's summary is a stored snapshot. The
/// figures were derived once at placement and never recomputed, so later
/// price or coupon changes cannot rewrite history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier
    pub id: String,

    /// Owning user; not exposed on the wire
    #[serde(skip_serializing)]
    pub user_id: String,

    /// When the order was placed
    pub placed_at: DateTime<Utc>,

    /// Current status
    pub status: OrderStatus,

    /// Payment method chosen at checkout
    pub payment_method: String,

    /// Shipping details as submitted
    pub shipping: ShippingDetails,

    /// Product lines frozen at checkout
    pub items: Vec<CartLine>,

    /// Coupon code that was active, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,

    /// Totals breakdown snapshot
    pub summary: OrderSummary,
}

// =============================================================================
// Request / Response Models
// =============================================================================

/// Returns the default payment method (cash on delivery)
fn default_payment_method() -> String {
    "cod".to_string()
}

/// Input for placing an order
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderInput {
    /// Shipping details, validated before anything else happens
    #[serde(flatten)]
    pub shipping: ShippingDetails,

    /// Payment method (defaults to cash on delivery)
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
}

/// Response for a successfully placed order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlacedResponse {
    /// Envelope flag checked by the storefront
    pub ok: bool,

    /// Identifier for tracking the order
    pub order_id: String,

    /// Totals the order was placed with
    pub summary: OrderSummary,
}

/// Response for the order list endpoint
#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub ok: bool,
    pub orders: Vec<Order>,
}

/// Response for the order detail endpoint
#[derive(Debug, Serialize)]
pub struct OrderDetailResponse {
    pub ok: bool,
    pub order: Order,
}
