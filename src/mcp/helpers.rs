//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication
//! and OpenAI widget metadata construction.

use serde_json::{json, Value};

/// Constructs the metadata required by the OpenAI widget system.
///
/// # Arguments
///
/// * `session_id` - Optional identifier to link tool calls to a specific widget session.
pub fn widget_meta(session_id: Option<&str>) -> Value {
    let mut meta = json!({
        "openai/outputTemplate": super::models::WIDGET_TEMPLATE_URI,
        "openai/toolInvocation/invoking": "Opening the storefront",
        "openai/toolInvocation/invoked": "Storefront ready",
        "openai/widgetAccessible": true,
    });

    if let Some(id) = session_id {
        meta["openai/widgetSessionId"] = json!(id);
    }

    meta
}

/// Builds a JSON-RPC 2.0 success response echoing the request `id`.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Wraps a tool result in the shape MCP clients expect: a text block for the
/// model, structured data for the widget, and widget metadata.
pub fn tool_result(text: impl Into<String>, structured: Value, session_id: Option<&str>) -> Value {
    json!({
        "content": [{ "type": "text", "text": text.into() }],
        "structuredContent": structured,
        "_meta": widget_meta(session_id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_envelopes() {
        let success = rpc_success(json!(1), json!("ok"));
        assert_eq!(success["result"], "ok");
        assert_eq!(success["id"], 1);

        let error = rpc_error(json!(2), -1, "fail");
        assert_eq!(error["error"]["message"], "fail");
        assert_eq!(error["id"], 2);
    }

    #[test]
    fn widget_meta_links_the_session_when_known() {
        assert!(widget_meta(None).get("openai/widgetSessionId").is_none());
        assert_eq!(widget_meta(Some("abc"))["openai/widgetSessionId"], "abc");
    }
}
