//! Checkout Module
//!
//! Order placement and lookup:
//! - Domain models (ShippingDetails, Order, responses)
//! - Shipping validation and receipt formatting helpers
//! - REST API handlers for placing and tracking orders

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Order, OrderStatus, ShippingDetails};
