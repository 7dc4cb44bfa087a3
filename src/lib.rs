//! Storefront Library
//!
//! Catalog browsing, search/category filtering and a shopping cart, served
//! over REST and MCP (Model Context Protocol).

// Domain modules
pub mod cart;
pub mod catalog;
pub mod mcp;
pub mod session;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;

pub use error::{Result, StorefrontError};
