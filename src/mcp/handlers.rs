//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the storefront.
//! It exports `handle_tool_call` publicly to make it accessible for tests.

use super::{helpers::*, models::*};
use crate::{
    cart::{
        ledger::format_item_summary,
        models::{CartProductInput, CartView, UpdateQuantityInput, ViewCartInput},
    },
    catalog::filter::filter_products,
    error::{Result, StorefrontError},
    session::state::{get_or_create_session_id, AppState, SharedState},
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use tracing::{info, warn};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse))
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: std::result::Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!(error = %e.body_text(), "rejected JSON-RPC body");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    info!(method = method_name, id = %id, "MCP call");

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "resources/list" => rpc_success(id, handle_resources_list()),
        "resources/read" => rpc_success(id, handle_resources_read(&state).await),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(err) => {
                    warn!(tool = tool_name, error = %err, "tool call failed");
                    rpc_error(id, INVALID_PARAMS, err.to_string())
                }
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            warn!(method = method_name, "unknown MCP method");
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true },
            "resources": { "listChanged": true, "subscribe": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn session_property() -> Value {
    json!({ "type": "string", "description": "Storefront session; omitted to start a new one" })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": SEARCH_TOOL_NAME,
                "title": "Search products",
                "description": "Lists catalog products whose name contains the query, optionally limited to one category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "query": { "type": "string", "default": "" },
                        "category": {
                            "type": "string",
                            "enum": ["all", "phones", "tablets", "watches", "accessories"],
                            "default": "all"
                        }
                    },
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            },
            {
                "name": ADD_TOOL_NAME,
                "title": "Add to cart",
                "description": "Adds one unit of a catalog product to the cart and returns the cart with its totals.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "productId": { "type": "integer" },
                        "sessionId": session_property()
                    },
                    "required": ["productId"],
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            },
            {
                "name": REMOVE_TOOL_NAME,
                "title": "Remove from cart",
                "description": "Removes a product from the cart entirely.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "productId": { "type": "integer" },
                        "sessionId": session_property()
                    },
                    "required": ["productId"],
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            },
            {
                "name": QUANTITY_TOOL_NAME,
                "title": "Change quantity",
                "description": "Changes the quantity of a product already in the cart. The quantity never drops below 1.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "productId": { "type": "integer" },
                        "delta": { "type": "integer" },
                        "sessionId": session_property()
                    },
                    "required": ["productId", "delta"],
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            },
            {
                "name": VIEW_CART_TOOL_NAME,
                "title": "View cart",
                "description": "Returns the cart contents, item count and total.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "sessionId": session_property()
                    },
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            }
        ],
        "_meta": widget_meta(None)
    })
}

/// Handles `resources/list` request.
fn handle_resources_list() -> Value {
    json!({
        "resources": [{
            "name": "Storefront",
            "uri": WIDGET_TEMPLATE_URI,
            "mimeType": WIDGET_MIME_TYPE,
            "_meta": widget_meta(None)
        }],
        "_meta": widget_meta(None)
    })
}

/// Handles `resources/read` request. A missing bundle is served as empty text.
async fn handle_resources_read(state: &AppState) -> Value {
    let html = match state.load_widget_html().await {
        Ok(html) => html,
        Err(err) => {
            warn!(error = %err, "widget html unavailable");
            String::new()
        }
    };
    json!({
        "contents": [{
            "uri": WIDGET_TEMPLATE_URI,
            "mimeType": WIDGET_MIME_TYPE,
            "text": html,
            "_meta": widget_meta(None)
        }],
        "_meta": widget_meta(None)
    })
}

/// Handles `tools/call` request (Business Logic).
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value> {
    // Clients may omit `arguments` for tools without required fields
    let args = if args.is_null() { json!({}) } else { args };
    match name {
        SEARCH_TOOL_NAME => handle_search_tool(state, args),
        ADD_TOOL_NAME => {
            let input: CartProductInput = serde_json::from_value(args)?;
            let view = state.add_to_cart(input.session_id, input.product_id)?;
            Ok(cart_result(view))
        }
        REMOVE_TOOL_NAME => {
            let input: CartProductInput = serde_json::from_value(args)?;
            Ok(cart_result(
                state.remove_from_cart(input.session_id, input.product_id),
            ))
        }
        QUANTITY_TOOL_NAME => {
            let input: UpdateQuantityInput = serde_json::from_value(args)?;
            Ok(cart_result(state.update_quantity(
                input.session_id,
                input.product_id,
                input.delta,
            )))
        }
        VIEW_CART_TOOL_NAME => {
            let input: ViewCartInput = serde_json::from_value(args)?;
            let session_id = get_or_create_session_id(input.session_id);
            Ok(cart_result(state.cart_view(&session_id)))
        }
        _ => Err(StorefrontError::UnknownTool(name.to_string())),
    }
}

/// Handles the search_products tool functionality
fn handle_search_tool(state: &AppState, args: Value) -> Result<Value> {
    let input: SearchInput = serde_json::from_value(args)?;
    let products = filter_products(state.catalog.products(), &input.query, input.category);

    let message = if products.is_empty() {
        "No products match.".to_string()
    } else {
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        format!("Found {} product(s): {}", products.len(), names.join(", "))
    };

    Ok(tool_result(
        message,
        json!({
            "query": input.query,
            "category": input.category,
            "products": products
        }),
        None,
    ))
}

fn cart_result(view: CartView) -> Value {
    let message = if view.items.is_empty() {
        "Cart is empty.".to_string()
    } else {
        format!(
            "Cart: {}. {} item(s), total {}.",
            format_item_summary(&view.items),
            view.count,
            view.total
        )
    };
    let session_id = view.session_id.clone();
    tool_result(message, json!(view), Some(&session_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn state() -> AppState {
        AppState::with_assets_dir(PathBuf::from("does-not-exist"))
    }

    #[test]
    fn add_tool_aggregates_quantities() {
        let state = state();
        let args = json!({ "sessionId": "test_cart_1", "productId": 5 });

        handle_tool_call(&state, ADD_TOOL_NAME, args.clone()).expect("first add");
        let result = handle_tool_call(&state, ADD_TOOL_NAME, args).expect("second add");

        let cart = &result["structuredContent"];
        assert_eq!(cart["count"], 2);
        assert_eq!(cart["total"], 49980);
        assert_eq!(cart["items"][0]["id"], 5);
        assert_eq!(cart["items"][0]["quantity"], 2);
        assert_eq!(result["_meta"]["openai/widgetSessionId"], "test_cart_1");
    }

    #[test]
    fn search_tool_composes_query_and_category() {
        let result = handle_tool_call(
            &state(),
            SEARCH_TOOL_NAME,
            json!({ "query": "PRO", "category": "phones" }),
        )
        .unwrap();

        let names: Vec<_> = result["structuredContent"]["products"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["iPhone 15 Pro Max", "Xiaomi 14 Pro"]);
    }

    #[test]
    fn search_tool_without_arguments_lists_everything() {
        let result = handle_tool_call(&state(), SEARCH_TOOL_NAME, Value::Null).unwrap();
        assert_eq!(result["structuredContent"]["products"].as_array().unwrap().len(), 6);
        assert_eq!(result["structuredContent"]["category"], "all");
    }

    #[test]
    fn bad_arguments_and_unknown_tools_fail() {
        let state = state();
        assert!(matches!(
            handle_tool_call(&state, ADD_TOOL_NAME, json!({ "productId": 77 })),
            Err(StorefrontError::UnknownProduct(77))
        ));
        assert!(matches!(
            handle_tool_call(&state, SEARCH_TOOL_NAME, json!({ "category": "laptops" })),
            Err(StorefrontError::InvalidArguments(_))
        ));
        assert!(matches!(
            handle_tool_call(&state, VIEW_CART_TOOL_NAME, json!({ "cartId": "x" })),
            Err(StorefrontError::InvalidArguments(_))
        ));
        assert!(matches!(
            handle_tool_call(
                &state,
                QUANTITY_TOOL_NAME,
                json!({ "productId": 1, "delta": 1, "qty": 2 })
            ),
            Err(StorefrontError::InvalidArguments(_))
        ));
        assert!(matches!(
            handle_tool_call(&state, "checkout", json!({})),
            Err(StorefrontError::UnknownTool(_))
        ));
    }
}
