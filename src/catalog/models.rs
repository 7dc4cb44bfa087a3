//! Catalog Domain Models
//!
//! Products, the closed category set and the home-tab promo banners.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::StorefrontError;

// =============================================================================
// Constants
// =============================================================================

/// Wire value meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "all";

// =============================================================================
// Product
// =============================================================================

pub type ProductId = u64;

/// A purchasable product. Everything past `category` is display metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Whole currency units
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<u64>,
    pub image: String,
    pub category: Category,
    pub rating: f32,
    pub reviews: u32,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

// =============================================================================
// Categories
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Phones,
    Tablets,
    Watches,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Phones,
        Category::Tablets,
        Category::Watches,
        Category::Accessories,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Phones => "phones",
            Category::Tablets => "tablets",
            Category::Watches => "watches",
            Category::Accessories => "accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| StorefrontError::UnknownCategory(s.to_string()))
    }
}

/// Category selection of the filter bar.
///
/// Travels as a plain string: `"all"` or one of the category ids.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = StorefrontError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_str().to_string()
    }
}

/// One entry of the category bar.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryInfo {
    pub id: CategoryFilter,
    pub name: &'static str,
    pub icon: &'static str,
}

// =============================================================================
// Promos
// =============================================================================

/// Home-tab banner
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Promo {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}
