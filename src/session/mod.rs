//! Session Module
//!
//! Single source of truth for the authentication token lifecycle:
//! issue (login), renew (rotation) and clear (logout). Handlers elsewhere
//! resolve the caller through one helper instead of reading shared
//! storage ad hoc.

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used items for convenience
pub use handlers::routes;
pub use helpers::resolve_session;
pub use models::Session;
