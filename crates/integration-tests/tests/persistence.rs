//! Integration tests for the file-backed stores.
//!
//! Each test writes through one set of stores and reads back through a fresh
//! set, the way a restart of the storefront would.

use std::sync::Arc;

use serde_json::Value;
use shopfront_core::{CurrencyCode, Price, Product, ProductId, WishlistEntry};
use shopfront_integration_tests::{TestContext, UNREACHABLE_PRODUCTS_URL};
use shopfront_storefront::storage::{FileStorage, LocalStorage};
use shopfront_storefront::stores::{
    CART_STORAGE_KEY, CartStore, STORE_VERSION, WISHLIST_STORAGE_KEY, WishlistStore,
};

fn product(id: i32, name: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: String::new(),
        price: Price::from_f64(price, CurrencyCode::USD).expect("valid price"),
        image: format!("https://example.com/{id}.jpg"),
        category: None,
        rating: None,
    }
}

fn storage(ctx: &TestContext) -> Arc<dyn LocalStorage> {
    Arc::new(FileStorage::new(ctx.data_dir()))
}

#[test]
fn cart_survives_restart() {
    let ctx = TestContext::new();

    {
        let mut cart = CartStore::new(storage(&ctx));
        cart.hydrate();
        cart.add(&product(1, "Backpack", 109.95));
        cart.add(&product(2, "T-Shirt", 22.3));
        cart.add(&product(1, "Backpack", 109.95));
    }

    let mut cart = CartStore::new(storage(&ctx));
    assert!(cart.is_empty());
    assert!(cart.hydrate());

    let quantities: Vec<(i32, u32)> = cart
        .lines()
        .iter()
        .map(|l| (l.product.id.as_i32(), l.quantity))
        .collect();
    assert_eq!(quantities, vec![(1, 2), (2, 1)]);
    assert_eq!(cart.subtotal().to_string(), "$242.20");
}

#[test]
fn wishlist_survives_restart() {
    let ctx = TestContext::new();

    {
        let mut wishlist = WishlistStore::new(storage(&ctx));
        wishlist.hydrate();
        wishlist.add(WishlistEntry::from(&product(5, "Bracelet", 695.0)));
        assert!(wishlist.toggle(WishlistEntry::from(&product(6, "Ring", 168.0))));
        assert!(!wishlist.toggle(WishlistEntry::from(&product(5, "Bracelet", 695.0))));
    }

    let mut wishlist = WishlistStore::new(storage(&ctx));
    wishlist.hydrate();

    assert_eq!(wishlist.len(), 1);
    let entry = &wishlist.entries()[0];
    assert_eq!(entry.id, ProductId::new(6));
    assert_eq!(entry.price, "$168.00");
}

#[test]
fn persisted_document_has_versioned_envelope() {
    let ctx = TestContext::new();

    let mut cart = CartStore::new(storage(&ctx));
    cart.hydrate();
    cart.add(&product(1, "Backpack", 109.95));

    let raw = std::fs::read_to_string(ctx.data_dir().join(format!("{CART_STORAGE_KEY}.json")))
        .expect("cart file written");
    let doc: Value = serde_json::from_str(&raw).expect("valid JSON");

    assert_eq!(doc["version"], Value::from(STORE_VERSION));
    let items = doc["state"]["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], Value::from(1));
}

#[test]
fn corrupt_document_hydrates_empty_and_is_replaced() {
    let ctx = TestContext::new();
    let store = storage(&ctx);
    store
        .set_item(WISHLIST_STORAGE_KEY, "{ not json")
        .expect("write corrupt document");

    let mut wishlist = WishlistStore::new(store.clone());
    assert!(wishlist.hydrate());
    assert!(wishlist.is_empty());

    wishlist.add(WishlistEntry::from(&product(9, "Monitor", 999.99)));

    let raw = store
        .get_item(WISHLIST_STORAGE_KEY)
        .expect("readable")
        .expect("present");
    let doc: Value = serde_json::from_str(&raw).expect("rewritten as valid JSON");
    assert_eq!(doc["state"]["items"][0]["id"], Value::from(9));
}

#[test]
fn stores_do_not_share_keys() {
    let ctx = TestContext::new();

    let mut cart = CartStore::new(storage(&ctx));
    cart.hydrate();
    cart.add(&product(1, "Backpack", 109.95));

    let mut wishlist = WishlistStore::new(storage(&ctx));
    wishlist.hydrate();
    assert!(wishlist.is_empty());
    assert!(!wishlist.contains(ProductId::new(1)));
}

#[test]
fn external_cart_edits_reach_a_running_storefront() {
    let ctx = TestContext::new();
    let state = ctx.state(UNREACHABLE_PRODUCTS_URL);
    state.cart().add(&product(1, "Backpack", 109.95));

    // A second process (the CLI) editing the same data directory
    let mut other = CartStore::new(storage(&ctx));
    other.hydrate();
    other.add(&product(2, "T-Shirt", 22.3));

    state.ensure_hydrated();
    assert!(state.cart().contains(ProductId::new(2)));

    state.cart().add(&product(3, "Jacket", 55.99));

    let mut reopened = CartStore::new(storage(&ctx));
    reopened.hydrate();
    let ids: Vec<i32> = reopened
        .lines()
        .iter()
        .map(|l| l.product.id.as_i32())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn external_wishlist_removal_is_not_undone() {
    let ctx = TestContext::new();
    let state = ctx.state(UNREACHABLE_PRODUCTS_URL);
    state
        .wishlist()
        .add(WishlistEntry::from(&product(5, "Bracelet", 695.0)));

    let mut other = WishlistStore::new(storage(&ctx));
    other.hydrate();
    assert!(other.remove(ProductId::new(5)));

    state
        .wishlist()
        .add(WishlistEntry::from(&product(6, "Ring", 168.0)));

    let wishlist = state.wishlist();
    assert!(!wishlist.contains(ProductId::new(5)));
    assert!(wishlist.contains(ProductId::new(6)));
}
