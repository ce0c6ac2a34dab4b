//! View models shared by the page templates.

use shopfront_core::{CartLine, Product, WishlistEntry};

use crate::state::AppState;
use crate::stores::{CartStore, WishlistStore};

/// Counts shown in the page header.
#[derive(Clone, Debug, Default)]
pub struct HeaderView {
    pub cart_count: u32,
    pub wishlist_count: usize,
}

impl HeaderView {
    /// Read the current counts from both stores.
    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        let cart_count = state.cart().item_count();
        let wishlist_count = state.wishlist().len();
        Self {
            cart_count,
            wishlist_count,
        }
    }
}

/// Product card in a catalog grid.
#[derive(Clone, Debug)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub price: String,
    pub image: String,
    /// `rate (count)`, e.g. `3.9 (120)`.
    pub rating: Option<String>,
    pub detail_url: String,
    pub in_wishlist: bool,
}

impl ProductCardView {
    #[must_use]
    pub fn new(product: &Product, in_wishlist: bool) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.formatted_price(),
            image: product.image.clone(),
            rating: product
                .rating
                .map(|r| format!("{} ({})", r.rate, r.count)),
            detail_url: product.detail_path(),
            in_wishlist,
        }
    }

    /// Cards for a product grid, marking wishlist members.
    #[must_use]
    pub fn grid(products: &[Product], wishlist: &WishlistStore) -> Vec<Self> {
        products
            .iter()
            .map(|p| Self::new(p, wishlist.contains(p.id)))
            .collect()
    }
}

/// Wishlist grid tile.
#[derive(Clone, Debug)]
pub struct WishlistItemView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub detail_url: String,
}

impl From<&WishlistEntry> for WishlistItemView {
    fn from(entry: &WishlistEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.clone(),
            price: entry.price.clone(),
            image: entry.image.clone(),
            detail_url: entry.detail_path(),
        }
    }
}

/// Cart line display data.
#[derive(Clone, Debug)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub detail_url: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id.to_string(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            detail_url: line.product.detail_path(),
            quantity: line.quantity,
            price: line.product.formatted_price(),
            line_price: line.line_total().to_string(),
        }
    }
}

/// Cart display data.
#[derive(Clone, Debug)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: cart.subtotal().to_string(),
            item_count: cart.item_count(),
        }
    }
}
