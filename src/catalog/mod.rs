//! Catalog Domain Module
//!
//! This module contains the product catalog and its browsing logic:
//! - Domain models (Product, Category, CategoryFilter, Promo)
//! - The built-in product list and category bar
//! - Search/category filtering
//! - REST API handlers

pub mod data;
pub mod filter;
pub mod handlers;
pub mod models;

// Re-export commonly used types for convenience
pub use data::Catalog;
pub use filter::{filter_products, FilterState};
pub use handlers::routes;
