//! Integration tests for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! No external services are needed: the upstream catalog is replaced by a
//! `wiremock` server and the stores write to a scratch directory.
//!
//! # Test Categories
//!
//! - `catalog_client` - Product fetching and mapping
//! - `persistence` - Stores surviving a restart
//! - `storefront_routes` - Pages and form actions through the router

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use shopfront_storefront::config::{CatalogConfig, StorefrontConfig};
use shopfront_storefront::state::AppState;
use url::Url;
use uuid::Uuid;

/// Address nothing listens on, for unreachable-endpoint tests.
pub const UNREACHABLE_PRODUCTS_URL: &str = "http://127.0.0.1:9/products";

/// A scratch data directory, removed when dropped.
pub struct TestContext {
    data_dir: PathBuf,
}

impl TestContext {
    #[must_use]
    pub fn new() -> Self {
        let data_dir = std::env::temp_dir().join(format!("shopfront-test-{}", Uuid::new_v4()));
        Self { data_dir }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Storefront configuration reading products from `products_url`.
    #[must_use]
    pub fn config(&self, products_url: &str) -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            data_dir: self.data_dir.clone(),
            catalog: CatalogConfig {
                products_url: Url::parse(products_url).unwrap(),
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }

    /// File-backed application state, as the server builds it.
    #[must_use]
    pub fn state(&self, products_url: &str) -> AppState {
        AppState::new(self.config(products_url))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.data_dir);
    }
}

/// `products_url` for a mock server mounted at `/products`.
#[must_use]
pub fn products_url(server_uri: &str) -> String {
    format!("{server_uri}/products")
}

/// Three product records in the upstream JSON shape.
#[must_use]
pub fn product_fixture() -> Value {
    json!([
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use and walks in the forest.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 22.3,
            "description": "Slim-fitting style, contrast raglan long sleeve.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        },
        {
            "id": 3,
            "title": "Mens Cotton Jacket",
            "price": 55.99,
            "description": "Great outerwear jackets for Spring/Autumn/Winter.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/71li-ujtlUL._AC_UX679_.jpg"
        }
    ])
}
