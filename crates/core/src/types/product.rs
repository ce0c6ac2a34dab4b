//! Product view model.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score.
    pub rate: f64,
    /// Number of ratings behind the average.
    pub count: u32,
}

/// A catalog product as shown by the pages.
///
/// Built once from an upstream catalog record and never mutated afterwards.
/// Cart lines keep a clone of it as their snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Absolute image URL.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Currency string for display, e.g. `$109.95`.
    #[must_use]
    pub fn formatted_price(&self) -> String {
        self.price.to_string()
    }

    /// Route of the product detail page.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("/products/{}", self.id)
    }
}
