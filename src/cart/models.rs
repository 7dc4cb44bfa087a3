//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use serde::{Deserialize, Serialize};

use super::ledger::{cart_count, cart_total};
use crate::catalog::models::{Product, ProductId};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Represents one product in the cart together with its quantity
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLineItem {
    /// Snapshot of the product taken when it was first added
    #[serde(flatten)]
    pub product: Product,

    /// Always at least 1
    pub quantity: u64,
}

impl CartLineItem {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }
}

/// Ordered line items, at most one per product id, first-added first.
///
/// Only the ledger functions in [`super::ledger`] change its contents.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    pub(super) items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// API Inputs / Outputs
// =============================================================================

/// Input for adding or removing a product
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CartProductInput {
    pub product_id: ProductId,

    /// Optional session identifier
    pub session_id: Option<String>,
}

/// Input for the quantity +/- buttons
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateQuantityInput {
    pub product_id: ProductId,

    /// Signed change, the result is clamped to a minimum of 1
    pub delta: i64,

    /// Optional session identifier
    pub session_id: Option<String>,
}

/// Input for reading a cart
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ViewCartInput {
    pub session_id: Option<String>,
}

/// Cart contents plus the derived badge count and order total
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub session_id: String,
    pub items: Cart,
    pub total: u64,
    pub count: u64,
}

impl CartView {
    pub fn new(session_id: String, cart: Cart) -> Self {
        Self {
            total: cart_total(&cart),
            count: cart_count(&cart),
            session_id,
            items: cart,
        }
    }
}
