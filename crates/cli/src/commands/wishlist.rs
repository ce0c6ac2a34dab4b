//! Wishlist commands.

use shopfront_core::{ProductId, WishlistEntry};

use super::{CommandError, Context};

/// Print the wishlist entries.
pub fn show(ctx: &Context) {
    let wishlist = ctx.wishlist();

    if wishlist.is_empty() {
        tracing::info!("No items in wishlist.");
        return;
    }

    for entry in wishlist.entries() {
        tracing::info!("{:>4}  {:>10}  {}", entry.id, entry.price, entry.name);
    }
    tracing::info!("{} saved", wishlist.len());
}

/// Add a catalog product to the wishlist.
pub async fn add(ctx: &Context, id: ProductId) -> Result<(), CommandError> {
    let product = ctx.product(id).await?;

    ctx.wishlist().add(WishlistEntry::from(&product));
    tracing::info!("Added {} to the wishlist", product.name);
    Ok(())
}

/// Remove a wishlist entry.
pub fn remove(ctx: &Context, id: ProductId) {
    if ctx.wishlist().remove(id) {
        tracing::info!("Removed product {} from the wishlist", id);
    } else {
        tracing::info!("Product {} is not in the wishlist", id);
    }
}

/// Add the product if absent, remove it otherwise.
///
/// Removal works offline; only an add needs the catalog.
pub async fn toggle(ctx: &Context, id: ProductId) -> Result<(), CommandError> {
    let mut wishlist = ctx.wishlist();
    if wishlist.remove(id) {
        tracing::info!("Removed product {} from the wishlist", id);
        return Ok(());
    }

    let product = ctx.product(id).await?;
    wishlist.add(WishlistEntry::from(&product));
    tracing::info!("Added {} to the wishlist", product.name);
    Ok(())
}
