//! Model Context Protocol (MCP) Module
//!
//! This module exposes the storefront to MCP clients, including:
//! - Protocol models (JsonRpcRequest, tool names, constants)
//! - RPC helpers (success/error responses, widget metadata)
//! - MCP handlers (initialize, tools/list, tools/call, etc.)

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types and functions
pub use handlers::routes;
