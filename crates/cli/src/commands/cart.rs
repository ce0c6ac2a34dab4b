//! Cart commands.

use shopfront_core::ProductId;

use super::{CommandError, Context};

/// Print the cart lines and subtotal.
pub fn show(ctx: &Context) {
    let cart = ctx.cart();

    if cart.is_empty() {
        tracing::info!("Your cart is empty.");
        return;
    }

    for line in cart.lines() {
        tracing::info!(
            "{:>4}  {:>3} x {:>10}  {:>10}  {}",
            line.product.id,
            line.quantity,
            line.product.formatted_price(),
            line.line_total(),
            line.product.name
        );
    }
    tracing::info!("Items: {}", cart.item_count());
    tracing::info!("Subtotal: {}", cart.subtotal());
}

/// Add a catalog product, increasing the quantity if already present.
pub async fn add(ctx: &Context, id: ProductId, quantity: u32) -> Result<(), CommandError> {
    let product = ctx.product(id).await?;

    let mut cart = ctx.cart();
    cart.add_quantity(&product, quantity);

    let in_cart = cart.get(id).map_or(0, |line| line.quantity);
    tracing::info!("{} in cart: {}", product.name, in_cart);
    Ok(())
}

/// Set a line quantity; zero removes the line.
///
/// A product that is not in the cart is left alone.
pub fn set(ctx: &Context, id: ProductId, quantity: u32) {
    let mut cart = ctx.cart();
    if !cart.contains(id) {
        tracing::info!("Product {} is not in the cart", id);
        return;
    }

    if cart.update_quantity(id, quantity) {
        tracing::info!("Product {} quantity set to {}", id, quantity);
    } else {
        tracing::info!("Product {} already has quantity {}", id, quantity);
    }
}

/// Remove a cart line.
pub fn remove(ctx: &Context, id: ProductId) {
    if ctx.cart().remove(id) {
        tracing::info!("Removed product {} from the cart", id);
    } else {
        tracing::info!("Product {} is not in the cart", id);
    }
}

/// Empty the cart.
pub fn clear(ctx: &Context) {
    if ctx.cart().clear() {
        tracing::info!("Cart cleared");
    } else {
        tracing::info!("Cart was already empty");
    }
}
