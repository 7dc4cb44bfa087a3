//! Request helpers shared by the integration suites

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use storefront::router::create_app_router;
use storefront::session::AppState;

/// Helper function to create a test app instance
pub fn create_test_app() -> axum::Router {
    let state = Arc::new(AppState::new());
    create_app_router(state)
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

/// Sends a JSON body (REST API)
pub async fn send_rest_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Sends a bodiless GET (REST API)
#[allow(dead_code)]
pub async fn send_get(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Sends a JSON-RPC request to /mcp
#[allow(dead_code)]
pub async fn send_jsonrpc_request(
    app: &axum::Router,
    method: &str,
    params: Option<Value>,
    id: i32,
) -> (StatusCode, Value) {
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id
    });
    send_rest_request(app, "POST", "/mcp", request_body).await
}

/// Calls one MCP tool and returns the JSON-RPC response body
#[allow(dead_code)]
pub async fn call_tool(app: &axum::Router, name: &str, arguments: Value, id: i32) -> Value {
    let params = json!({ "name": name, "arguments": arguments });
    let (status, body) = send_jsonrpc_request(app, "tools/call", Some(params), id).await;
    assert_eq!(status, StatusCode::OK);
    body
}
