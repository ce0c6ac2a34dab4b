//! Wire types for the upstream product listing endpoint.
//!
//! The endpoint returns a JSON array of these records. Fields not listed here
//! are ignored.

use serde::Deserialize;

/// A product record as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawProduct {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Price as a plain number in dollars.
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: Option<RawRating>,
}

/// Rating summary attached to a product record.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawRating {
    pub rate: f64,
    pub count: u32,
}
