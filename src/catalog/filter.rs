//! Search and category filtering over the catalog.

use serde::{Deserialize, Serialize};

use super::models::{CategoryFilter, Product};

/// Returns the products matching both the category selection and the
/// case-insensitive name query, in catalog order.
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &str,
    category: CategoryFilter,
) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| category.matches(p.category))
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Search box plus category bar state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        filter_products(products, &self.query, self.category)
    }
}
