//! Cart and wishlist stores.
//!
//! Both stores are explicitly owned containers keyed by product id, built on
//! the same [`PersistedStore`] core:
//!
//! - Mutations are synchronous. Each effective change notifies subscribers
//!   and is then mirrored to [`LocalStorage`](crate::storage::LocalStorage).
//! - [`hydrate`](PersistedStore::hydrate) loads the persisted state once.
//!   Repeated calls are no-ops.
//! - Storage failures never surface: unreadable state hydrates as empty and
//!   failed writes are logged while the in-memory state stays authoritative.

pub mod cart;
mod persisted;
pub mod wishlist;

pub use cart::{CART_STORAGE_KEY, CartStore};
pub use persisted::{Keyed, PersistedStore, STORE_VERSION, SubscriptionId};
pub use wishlist::{WISHLIST_STORAGE_KEY, WishlistStore};
