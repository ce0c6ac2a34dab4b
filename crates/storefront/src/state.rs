//! Application state shared across handlers.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::storage::{FileStorage, LocalStorage};
use crate::stores::{CartStore, WishlistStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and owns the catalog client and
/// the two stores. Store locks are held only for synchronous work and must
/// never be held across an `.await`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    cart: Mutex<CartStore>,
    wishlist: Mutex<WishlistStore>,
}

impl AppState {
    /// Create application state persisting to files under `config.data_dir`.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let storage = Arc::new(FileStorage::new(&config.data_dir));
        Self::with_storage(config, storage)
    }

    /// Create application state on top of an explicit storage backend.
    ///
    /// Both stores are hydrated before this returns, so no handler can observe
    /// a store that has not loaded its persisted state yet.
    #[must_use]
    pub fn with_storage(config: StorefrontConfig, storage: Arc<dyn LocalStorage>) -> Self {
        let catalog = CatalogClient::new(&config.catalog);

        let mut cart = CartStore::new(storage.clone());
        cart.subscribe(|lines| {
            let units = lines
                .iter()
                .fold(0u32, |acc, l| acc.saturating_add(l.quantity));
            debug!(lines = lines.len(), units, "Cart changed");
        });
        cart.hydrate();

        let mut wishlist = WishlistStore::new(storage);
        wishlist.subscribe(|entries| debug!(entries = entries.len(), "Wishlist changed"));
        wishlist.hydrate();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart: Mutex::new(cart),
                wishlist: Mutex::new(wishlist),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Directory the file-backed stores write to.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.inner.config.data_dir
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Lock the cart.
    ///
    /// A poisoned lock is recovered: every store operation leaves the store
    /// in a valid state.
    pub fn cart(&self) -> MutexGuard<'_, CartStore> {
        self.inner.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the wishlist.
    pub fn wishlist(&self) -> MutexGuard<'_, WishlistStore> {
        self.inner
            .wishlist
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Hydrate both stores if that has not happened yet, and pick up changes
    /// another process (such as the CLI) wrote to the data directory since.
    ///
    /// Called by every page on mount. Idempotent while storage is unchanged.
    pub fn ensure_hydrated(&self) {
        self.cart().refresh();
        self.wishlist().refresh();
    }
}
