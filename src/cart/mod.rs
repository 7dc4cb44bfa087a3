//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Cart, CartLineItem, inputs, views)
//! - The cart ledger (add, remove, quantity, totals)
//! - REST API handlers

pub mod handlers;
pub mod ledger;
pub mod models;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Cart, CartLineItem, CartView};
