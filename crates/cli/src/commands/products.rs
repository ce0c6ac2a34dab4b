//! Catalog listing command.

use super::{CommandError, Context};

/// Print every product in the upstream catalog.
pub async fn list(ctx: &Context) -> Result<(), CommandError> {
    tracing::info!("Fetching {}", ctx.catalog().products_url());
    let products = ctx.catalog().try_fetch_products().await?;

    if products.is_empty() {
        tracing::info!("No products available.");
        return Ok(());
    }

    for product in &products {
        let category = product.category.as_deref().unwrap_or("-");
        tracing::info!(
            "{:>4}  {:>10}  {:<20}  {}",
            product.id,
            product.formatted_price(),
            category,
            product.name
        );
    }
    tracing::info!("{} products", products.len());

    Ok(())
}
