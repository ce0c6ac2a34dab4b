//! Records kept by the cart and the wishlist.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::product::Product;

/// One product in the cart.
///
/// `quantity` is always at least 1 while the line exists; the cart drops a
/// line instead of keeping it at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Create a line with the given quantity.
    #[must_use]
    pub const fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// A saved product snapshot on the wishlist.
///
/// `price` is the already formatted currency string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl WishlistEntry {
    /// Route of the product detail page.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("/products/{}", self.id)
    }
}

impl From<&Product> for WishlistEntry {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.formatted_price(),
            image: product.image.clone(),
        }
    }
}
