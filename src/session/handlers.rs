//! REST API handlers for the storefront shell
//!
//! Search box, category bar and tab navigation for one session.

use super::{models::*, state::SharedState};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for page-level state
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/storefront/filter", post(set_filter))
        .route("/storefront/tab", post(set_tab))
        .route("/storefront/:session_id", get(view_session))
}

/// Endpoint: POST /storefront/filter
async fn set_filter(
    State(state): State<SharedState>,
    Json(payload): Json<SetFilterInput>,
) -> Json<SessionView> {
    Json(state.set_filter(payload.session_id, payload.query, payload.category))
}

/// Endpoint: POST /storefront/tab
async fn set_tab(
    State(state): State<SharedState>,
    Json(payload): Json<SetTabInput>,
) -> Json<SessionView> {
    Json(state.set_tab(payload.session_id, payload.tab))
}

/// Endpoint: GET /storefront/:session_id
async fn view_session(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Json<SessionView> {
    Json(state.session_view(&session_id))
}
