//! Subcommand implementations.
//!
//! Every command opens the stores on top of the data directory and hydrates
//! them before doing anything else, the same way a page view does.

pub mod cart;
pub mod products;
pub mod wishlist;

use std::path::PathBuf;
use std::sync::Arc;

use shopfront_core::{Product, ProductId};
use shopfront_storefront::catalog::{CatalogClient, CatalogError};
use shopfront_storefront::config::CatalogConfig;
use shopfront_storefront::storage::{FileStorage, LocalStorage};
use shopfront_storefront::stores::{CartStore, WishlistStore};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The catalog has no product with this ID.
    #[error("No product with ID {0} in the catalog")]
    UnknownProduct(ProductId),
}

/// Shared handles for one command run.
pub struct Context {
    data_dir: PathBuf,
    storage: Arc<dyn LocalStorage>,
    catalog: CatalogClient,
}

impl Context {
    pub fn new(data_dir: PathBuf, catalog: &CatalogConfig) -> Self {
        let storage: Arc<dyn LocalStorage> = Arc::new(FileStorage::new(&data_dir));
        Self {
            data_dir,
            storage,
            catalog: CatalogClient::new(catalog),
        }
    }

    /// Open and hydrate the cart.
    pub fn cart(&self) -> CartStore {
        let mut cart = CartStore::new(self.storage.clone());
        cart.hydrate();
        cart
    }

    /// Open and hydrate the wishlist.
    pub fn wishlist(&self) -> WishlistStore {
        let mut wishlist = WishlistStore::new(self.storage.clone());
        wishlist.hydrate();
        wishlist
    }

    pub const fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Look a product up in the catalog.
    pub async fn product(&self, id: ProductId) -> Result<Product, CommandError> {
        tracing::debug!(data_dir = %self.data_dir.display(), %id, "Looking up product");
        self.catalog
            .find_product(id)
            .await?
            .ok_or(CommandError::UnknownProduct(id))
    }
}
