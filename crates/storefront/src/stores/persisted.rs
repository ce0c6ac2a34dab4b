//! Generic persisted, observable store keyed by product id.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shopfront_core::{CartLine, ProductId, WishlistEntry};
use tracing::{debug, warn};

use crate::storage::LocalStorage;

/// Version tag written into every persisted document.
///
/// Documents carrying any other version are discarded at hydration.
pub const STORE_VERSION: u32 = 0;

/// Records that a store can hold.
pub trait Keyed {
    /// Identity of the record; a store holds at most one record per key.
    fn key(&self) -> ProductId;

    /// Whether the record may stay in the store.
    fn is_retained(&self) -> bool {
        true
    }
}

impl Keyed for CartLine {
    fn key(&self) -> ProductId {
        self.product_id()
    }

    fn is_retained(&self) -> bool {
        self.quantity > 0
    }
}

impl Keyed for WishlistEntry {
    fn key(&self) -> ProductId {
        self.id
    }
}

/// Handle returned by [`PersistedStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn Fn(&[T]) + Send + Sync>;

/// On-disk shape: `{"state": {"items": [...]}, "version": 0}`.
#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    state: StateRef<'a, T>,
    version: u32,
}

#[derive(Serialize)]
struct StateRef<'a, T> {
    items: &'a [T],
}

#[derive(Deserialize)]
struct Envelope<T> {
    state: State<T>,
    version: u32,
}

#[derive(Deserialize)]
struct State<T> {
    items: Vec<T>,
}

/// Ordered collection of records, unique by key, mirrored to local storage.
pub struct PersistedStore<T> {
    storage_key: &'static str,
    storage: Arc<dyn LocalStorage>,
    items: Vec<T>,
    hydrated: bool,
    /// Raw document as last read from or written to storage.
    synced: Option<String>,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_subscription: u64,
}

impl<T> std::fmt::Debug for PersistedStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistedStore")
            .field("storage_key", &self.storage_key)
            .field("len", &self.items.len())
            .field("hydrated", &self.hydrated)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<T> PersistedStore<T>
where
    T: Keyed + Serialize + DeserializeOwned,
{
    /// Create an empty, not yet hydrated store persisted under `storage_key`.
    #[must_use]
    pub fn new(storage_key: &'static str, storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            storage_key,
            storage,
            items: Vec::new(),
            hydrated: false,
            synced: None,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Load persisted state into memory.
    ///
    /// Only the first call does anything; it returns `true`. Unreadable,
    /// unparsable or foreign-version state hydrates as empty. A store that
    /// was already mutated counts as hydrated, so live state is never
    /// replaced by older persisted state.
    pub fn hydrate(&mut self) -> bool {
        if self.hydrated {
            return false;
        }
        self.hydrated = true;

        let loaded = match self.storage.get_item(self.storage_key) {
            Ok(raw) => {
                let items = self.parse(raw.as_deref());
                self.synced = raw;
                items
            }
            Err(e) => {
                warn!(key = self.storage_key, error = %e, "Storage unavailable, starting empty");
                Vec::new()
            }
        };
        if !loaded.is_empty() {
            debug!(key = self.storage_key, count = loaded.len(), "Store hydrated");
            self.items = loaded;
            self.notify();
        }
        true
    }

    /// Pick up state written to storage by another process.
    ///
    /// Hydrates a store that has not been hydrated yet. Otherwise, a stored
    /// document that differs from the one this store last read or wrote
    /// replaces the in-memory records and notifies subscribers. Returns
    /// whether the store hydrated or reloaded.
    pub fn refresh(&mut self) -> bool {
        if !self.hydrated {
            return self.hydrate();
        }

        let raw = match self.storage.get_item(self.storage_key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = self.storage_key, error = %e, "Storage unavailable, keeping in-memory state");
                return false;
            }
        };
        if raw == self.synced {
            return false;
        }

        debug!(key = self.storage_key, "Stored state changed elsewhere, reloading");
        self.items = self.parse(raw.as_deref());
        self.synced = raw;
        self.notify();
        true
    }

    #[must_use]
    pub const fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, key: ProductId) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    #[must_use]
    pub fn contains(&self, key: ProductId) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply `change` to the records. It returns whether anything changed.
    ///
    /// A hydrated store first picks up changes made elsewhere, so `change`
    /// always sees the latest stored state. On change, records that are no
    /// longer retained are dropped, then subscribers are notified and the new
    /// state is persisted.
    pub fn mutate(&mut self, change: impl FnOnce(&mut Vec<T>) -> bool) -> bool {
        if self.hydrated {
            self.refresh();
        }
        if !change(&mut self.items) {
            return false;
        }
        self.hydrated = true;
        self.items.retain(Keyed::is_retained);
        self.notify();
        self.persist();
        true
    }

    /// Insert a record or replace the one with the same key in place.
    pub fn upsert(&mut self, item: T) -> bool
    where
        T: PartialEq,
    {
        self.mutate(|items| match items.iter_mut().find(|i| i.key() == item.key()) {
            Some(existing) if *existing == item => false,
            Some(existing) => {
                *existing = item;
                true
            }
            None => {
                items.push(item);
                true
            }
        })
    }

    /// Remove the record with `key`. Returns `false` if there was none.
    pub fn remove(&mut self, key: ProductId) -> bool {
        self.mutate(|items| {
            let before = items.len();
            items.retain(|i| i.key() != key);
            items.len() != before
        })
    }

    /// Remove every record. Returns `false` if the store was already empty.
    pub fn clear(&mut self) -> bool {
        self.mutate(|items| {
            let changed = !items.is_empty();
            items.clear();
            changed
        })
    }

    /// Register a callback run synchronously after every effective change.
    pub fn subscribe(&mut self, listener: impl Fn(&[T]) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a callback. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.items);
        }
    }

    fn persist(&mut self) {
        let envelope = EnvelopeRef {
            state: StateRef { items: &self.items },
            version: STORE_VERSION,
        };
        let json = match serde_json::to_string(&envelope) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = self.storage_key, error = %e, "Failed to serialize store");
                return;
            }
        };
        match self.storage.set_item(self.storage_key, &json) {
            Ok(()) => self.synced = Some(json),
            Err(e) => warn!(key = self.storage_key, error = %e, "Failed to persist store"),
        }
    }

    /// Decode a stored document. Missing, unparsable or foreign-version
    /// documents decode as empty.
    fn parse(&self, raw: Option<&str>) -> Vec<T> {
        let Some(raw) = raw else {
            return Vec::new();
        };

        let envelope: Envelope<T> = match serde_json::from_str(raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(key = self.storage_key, error = %e, "Corrupt stored state, starting empty");
                return Vec::new();
            }
        };

        if envelope.version != STORE_VERSION {
            warn!(
                key = self.storage_key,
                version = envelope.version,
                "Unknown stored state version, starting empty"
            );
            return Vec::new();
        }

        dedupe(envelope.state.items)
    }
}

/// Collapse duplicate keys to their last occurrence, keeping first position.
fn dedupe<T: Keyed>(raw: Vec<T>) -> Vec<T> {
    let mut items: Vec<T> = Vec::with_capacity(raw.len());
    for item in raw.into_iter().filter(Keyed::is_retained) {
        match items.iter_mut().find(|i| i.key() == item.key()) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
    }
    items
}
