//! REST API handlers for catalog browsing
//!
//! These endpoints are stateless: they read the immutable catalog only.

use super::{data, filter::FilterState, models::*};
use crate::{error::StorefrontError, session::state::SharedState};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

/// Creates routes for catalog-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/catalog/products", get(list_products))
        .route("/catalog/products/:id", get(get_product))
        .route("/catalog/categories", get(list_categories))
        .route("/catalog/sections", get(list_sections))
        .route("/catalog/promos", get(list_promos))
}

/// Endpoint: GET /catalog/products?query=&category=
async fn list_products(
    State(state): State<SharedState>,
    Query(filter): Query<FilterState>,
) -> Json<Vec<Product>> {
    let visible = filter
        .apply(state.catalog.products())
        .into_iter()
        .cloned()
        .collect();
    Json(visible)
}

/// Endpoint: GET /catalog/products/:id
async fn get_product(
    State(state): State<SharedState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, StorefrontError> {
    state
        .catalog
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(StorefrontError::UnknownProduct(id))
}

/// Endpoint: GET /catalog/categories
async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(data::categories())
}

/// Endpoint: GET /catalog/sections
/// Categories shown on the catalog tab.
async fn list_sections() -> Json<Vec<CategoryInfo>> {
    Json(data::browsable_categories())
}

/// Endpoint: GET /catalog/promos
async fn list_promos() -> Json<Vec<Promo>> {
    Json(data::promos())
}
