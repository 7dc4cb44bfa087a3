//! Storefront Session Module
//!
//! Per-visitor page state and the application state that owns it:
//! - Session models (Tab, StorefrontSession, views and inputs)
//! - Application state and the operations shared by REST and MCP
//! - REST API handlers for filter and tab changes

pub mod handlers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
