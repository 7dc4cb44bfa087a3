//! Storefront Session Models
//!
//! Per-visitor UI snapshot: navigation tab, search/category filter and cart.

use serde::{Deserialize, Serialize};

use crate::{
    cart::models::{Cart, CartView},
    catalog::{
        filter::FilterState,
        models::{CategoryFilter, Product},
    },
};

/// Bottom navigation tabs
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Catalog,
    Profile,
}

/// Everything one visitor has changed since opening the page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorefrontSession {
    pub active_tab: Tab,
    pub filter: FilterState,
    pub cart: Cart,
}

impl StorefrontSession {
    /// Runs a ledger transition against the session cart.
    pub fn apply_cart(&mut self, transition: impl FnOnce(Cart) -> Cart) {
        let cart = std::mem::take(&mut self.cart);
        self.cart = transition(cart);
    }
}

// =============================================================================
// API Inputs / Outputs
// =============================================================================

/// Input for the search box and category bar.
///
/// Absent fields keep their current value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFilterInput {
    pub query: Option<String>,

    pub category: Option<CategoryFilter>,

    /// Optional session identifier
    pub session_id: Option<String>,
}

/// Input for switching tabs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTabInput {
    pub tab: Tab,

    /// Optional session identifier
    pub session_id: Option<String>,
}

/// What the page renders for a session
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: String,
    pub active_tab: Tab,
    #[serde(flatten)]
    pub filter: FilterState,
    /// Catalog products passing the current filter
    pub products: Vec<Product>,
    pub cart: CartView,
}
