//! Application State Management
//!
//! This module manages the shared in-memory state: sessions, carts,
//! placed orders and the coupon table.

use super::models::Cart;
use crate::checkout::models::Order;
use crate::coupon::{sample_coupons, Coupon};
use crate::session::models::Session;
use dashmap::DashMap;
use std::{collections::HashMap, sync::Arc};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state.
///
/// Everything lives in memory. DashMap allows concurrent access from
/// handlers without external Mutexes; carts and orders are keyed by the
/// owning user so token rotation never orphans them.
pub struct AppState {
    /// Active sessions, keyed by opaque token
    pub sessions: DashMap<String, Session>,

    /// One cart per user, keyed by user id
    pub carts: DashMap<String, Cart>,

    /// Placed orders, keyed by order id
    pub orders: DashMap<String, Order>,

    /// Coupon table, keyed by normalized code. Loaded once at startup;
    /// treated as externally supplied data by the coupon rules.
    pub coupons: HashMap<String, Coupon>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState with empty stores and the built-in coupons
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            carts: DashMap::new(),
            orders: DashMap::new(),
            coupons: sample_coupons(),
        }
    }
}
