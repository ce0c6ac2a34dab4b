//! Cart store.

use std::sync::Arc;

use shopfront_core::{CartLine, CurrencyCode, Price, Product, ProductId};

use super::persisted::{PersistedStore, SubscriptionId};
use crate::storage::LocalStorage;

/// Local storage key for the cart.
pub const CART_STORAGE_KEY: &str = "cart-storage";

/// Product snapshots with quantities, one line per product id.
#[derive(Debug)]
pub struct CartStore {
    inner: PersistedStore<CartLine>,
}

impl CartStore {
    /// Create an empty cart persisted to `storage`. Call [`Self::hydrate`]
    /// before the first read.
    #[must_use]
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            inner: PersistedStore::new(CART_STORAGE_KEY, storage),
        }
    }

    /// Load the persisted cart. Only the first call has an effect.
    pub fn hydrate(&mut self) -> bool {
        self.inner.hydrate()
    }

    /// Hydrate, or reload if another process changed the stored cart.
    pub fn refresh(&mut self) -> bool {
        self.inner.refresh()
    }

    #[must_use]
    pub const fn is_hydrated(&self) -> bool {
        self.inner.is_hydrated()
    }

    /// Add one unit of `product`.
    pub fn add(&mut self, product: &Product) {
        self.add_quantity(product, 1);
    }

    /// Add `quantity` units of `product`.
    ///
    /// A product already in the cart keeps its original snapshot and has its
    /// quantity increased, saturating at `u32::MAX`. Returns `false` if
    /// nothing changed: zero units, or a line already at the maximum.
    pub fn add_quantity(&mut self, product: &Product, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        self.inner.mutate(|lines| {
            match lines.iter_mut().find(|l| l.product_id() == product.id) {
                Some(line) => {
                    let before = line.quantity;
                    line.quantity = before.saturating_add(quantity);
                    line.quantity != before
                }
                None => {
                    lines.push(CartLine::new(product.clone(), quantity));
                    true
                }
            }
        })
    }

    /// Set the quantity of an existing line; zero removes it.
    ///
    /// Returns `false` if the product is not in the cart or the quantity is unchanged.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> bool {
        self.inner.mutate(|lines| {
            match lines.iter_mut().find(|l| l.product_id() == id) {
                Some(line) if line.quantity != quantity => {
                    line.quantity = quantity;
                    true
                }
                _ => false,
            }
        })
    }

    /// Remove the line for `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: ProductId) -> bool {
        self.inner.remove(id)
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> bool {
        self.inner.clear()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.inner.items()
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.inner.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.inner.contains(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines()
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        let currency = self
            .lines()
            .first()
            .map_or(CurrencyCode::default(), |l| l.product.price.currency_code);
        self.lines()
            .iter()
            .fold(Price::zero(currency), |acc, line| acc.plus(line.line_total()))
    }

    /// Register a callback run after every effective change.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&[CartLine]) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.inner.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}
