//! REST API handlers for shopping cart operations
//!
//! This module implements HTTP endpoints for the cart sheet: adding,
//! removing, the quantity buttons and reading the current cart.

use super::models::*;
use crate::{error::StorefrontError, session::state::SharedState};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart/add", post(add_item))
        .route("/cart/remove", post(remove_item))
        .route("/cart/quantity", post(update_quantity))
        .route("/cart/:session_id", get(view_cart))
}

/// Endpoint: POST /cart/add
async fn add_item(
    State(state): State<SharedState>,
    Json(payload): Json<CartProductInput>,
) -> Result<Json<CartView>, StorefrontError> {
    state
        .add_to_cart(payload.session_id, payload.product_id)
        .map(Json)
}

/// Endpoint: POST /cart/remove
async fn remove_item(
    State(state): State<SharedState>,
    Json(payload): Json<CartProductInput>,
) -> Json<CartView> {
    Json(state.remove_from_cart(payload.session_id, payload.product_id))
}

/// Endpoint: POST /cart/quantity
async fn update_quantity(
    State(state): State<SharedState>,
    Json(payload): Json<UpdateQuantityInput>,
) -> Json<CartView> {
    Json(state.update_quantity(payload.session_id, payload.product_id, payload.delta))
}

/// Endpoint: GET /cart/:session_id
async fn view_cart(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Json<CartView> {
    Json(state.cart_view(&session_id))
}
