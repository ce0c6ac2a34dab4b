//! Upstream product catalog client.
//!
//! # Architecture
//!
//! - One plain `GET` against the configured product listing endpoint per fetch
//! - No caching, retries or timeouts: the upstream API is the source of truth
//! - Raw records are mapped into [`Product`] view models by [`conversions`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog);
//!
//! // Never fails: errors are logged and an empty list is returned
//! let products = client.fetch_products().await;
//!
//! // Keeps the failure so the caller can show an error state
//! match client.try_fetch_products().await {
//!     Ok(products) => render_grid(products),
//!     Err(e) => render_error(e),
//! }
//! ```

pub mod conversions;
pub mod types;

use std::sync::Arc;

use shopfront_core::{Product, ProductId};
use thiserror::Error;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::CatalogConfig;

use conversions::convert_products;
use types::RawProduct;

/// Errors that can occur when loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Unexpected status {0}")]
    Status(u16),

    /// The body was not a JSON array of product records.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record parsed but cannot be turned into a product.
    #[error("Invalid product record {id}: {reason}")]
    InvalidRecord { id: i32, reason: String },
}

/// Client for the upstream product listing endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    products_url: Url,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                products_url: config.products_url.clone(),
            }),
        }
    }

    /// The endpoint this client reads from.
    #[must_use]
    pub fn products_url(&self) -> &Url {
        &self.inner.products_url
    }

    /// Fetch and map the full product listing.
    ///
    /// # Errors
    ///
    /// Fails as a whole if the request cannot be sent, the status is not 2xx,
    /// the body is not a JSON array of product records, or any record cannot
    /// be mapped.
    #[instrument(skip(self), fields(url = %self.inner.products_url))]
    pub async fn try_fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Fetching products");

        let response = self
            .inner
            .client
            .get(self.inner.products_url.clone())
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "Catalog responded");
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let raw: Vec<RawProduct> = serde_json::from_slice(&body)?;
        info!(count = raw.len(), "Products received");

        let products = convert_products(raw)?;
        debug!(count = products.len(), "Products after mapping");
        Ok(products)
    }

    /// Fetch the product listing, returning an empty list on any failure.
    ///
    /// The failure is logged at `error` level and never reaches the caller.
    pub async fn fetch_products(&self) -> Vec<Product> {
        self.try_fetch_products().await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to load products");
            Vec::new()
        })
    }

    /// Fetch the listing and pick out one product.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::try_fetch_products`].
    pub async fn find_product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        let products = self.try_fetch_products().await?;
        Ok(products.into_iter().find(|p| p.id == id))
    }
}
