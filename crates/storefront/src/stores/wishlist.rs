//! Wishlist store.

use std::sync::Arc;

use shopfront_core::{ProductId, WishlistEntry};

use super::persisted::{PersistedStore, SubscriptionId};
use crate::storage::LocalStorage;

/// Local storage key for the wishlist.
pub const WISHLIST_STORAGE_KEY: &str = "wishlist-storage";

/// Saved product snapshots, one per product id.
#[derive(Debug)]
pub struct WishlistStore {
    inner: PersistedStore<WishlistEntry>,
}

impl WishlistStore {
    /// Create an empty wishlist persisted to `storage`. Call [`Self::hydrate`]
    /// before the first read.
    #[must_use]
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            inner: PersistedStore::new(WISHLIST_STORAGE_KEY, storage),
        }
    }

    /// Load the persisted wishlist. Only the first call has an effect.
    pub fn hydrate(&mut self) -> bool {
        self.inner.hydrate()
    }

    /// Hydrate, or reload if another process changed the stored wishlist.
    pub fn refresh(&mut self) -> bool {
        self.inner.refresh()
    }

    #[must_use]
    pub const fn is_hydrated(&self) -> bool {
        self.inner.is_hydrated()
    }

    /// Insert `entry`, replacing any entry with the same id.
    pub fn add(&mut self, entry: WishlistEntry) {
        self.inner.upsert(entry);
    }

    /// Remove the entry for `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: ProductId) -> bool {
        self.inner.remove(id)
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.inner.contains(id)
    }

    /// Remove `entry` if its id is present, otherwise add it.
    ///
    /// Returns whether the id is on the wishlist afterwards, so two toggles
    /// in a row restore the original membership.
    pub fn toggle(&mut self, entry: WishlistEntry) -> bool {
        if self.remove(entry.id) {
            false
        } else {
            self.add(entry);
            true
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        self.inner.items()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Register a callback run after every effective change.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&[WishlistEntry]) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.inner.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn entry(id: i32) -> WishlistEntry {
        WishlistEntry {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: "$12.50".to_string(),
            image: format!("https://example.com/{id}.jpg"),
        }
    }

    fn wishlist() -> WishlistStore {
        let mut wishlist = WishlistStore::new(Arc::new(MemoryStorage::new()));
        wishlist.hydrate();
        wishlist
    }

    #[test]
    fn test_double_add_keeps_one_entry() {
        let mut wishlist = wishlist();
        wishlist.add(entry(1));
        wishlist.add(entry(1));
        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains(ProductId::new(1)));
    }

    #[test]
    fn test_add_replaces_snapshot() {
        let mut wishlist = wishlist();
        wishlist.add(entry(1));
        let mut updated = entry(1);
        updated.price = "$9.00".to_string();
        wishlist.add(updated);
        assert_eq!(wishlist.entries()[0].price, "$9.00");
    }

    #[test]
    fn test_remove_non_member_is_noop() {
        let mut wishlist = wishlist();
        wishlist.add(entry(1));
        assert!(!wishlist.remove(ProductId::new(2)));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut wishlist = wishlist();
        assert!(wishlist.toggle(entry(3)));
        assert!(wishlist.contains(ProductId::new(3)));
        assert!(!wishlist.toggle(entry(3)));
        assert!(!wishlist.contains(ProductId::new(3)));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_reload_restores_entries_in_order() {
        let storage = Arc::new(MemoryStorage::new());
        let mut first = WishlistStore::new(storage.clone());
        first.hydrate();
        first.add(entry(2));
        first.add(entry(1));

        let mut second = WishlistStore::new(storage);
        assert!(second.is_empty());
        second.hydrate();
        let ids: Vec<i32> = second.entries().iter().map(|e| e.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
