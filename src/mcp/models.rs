//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::models::CategoryFilter;

// =============================================================================
// MCP Constants
// =============================================================================

/// Tool searching the catalog
pub const SEARCH_TOOL_NAME: &str = "search_products";
/// Tool adding one unit of a product to the cart
pub const ADD_TOOL_NAME: &str = "add_to_cart";
/// Tool dropping a product from the cart
pub const REMOVE_TOOL_NAME: &str = "remove_from_cart";
/// Tool for the quantity +/- buttons
pub const QUANTITY_TOOL_NAME: &str = "update_quantity";
/// Tool returning the cart and its totals
pub const VIEW_CART_TOOL_NAME: &str = "view_cart";
/// URI for the widget template
pub const WIDGET_TEMPLATE_URI: &str = "ui://widget/storefront.html";
/// MIME type for the widget
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
/// Server identifier
pub const SERVER_NAME: &str = "storefront";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

/// Arguments of the search_products tool
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchInput {
    #[serde(default)]
    pub query: String,

    #[serde(default)]
    pub category: CategoryFilter,
}
