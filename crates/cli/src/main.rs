//! Shopfront CLI - Catalog, cart and wishlist tools.
//!
//! Works on the same data directory as the storefront server, so changes made
//! here show up on the next page view.
//!
//! # Usage
//!
//! ```bash
//! # List the upstream catalog
//! sf-cli products
//!
//! # Inspect and edit the cart
//! sf-cli cart show
//! sf-cli cart add 3 -q 2
//! sf-cli cart set 3 5
//! sf-cli cart remove 3
//! sf-cli cart clear
//!
//! # Inspect and edit the wishlist
//! sf-cli wishlist show
//! sf-cli wishlist toggle 7
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_DATA_DIR` - Directory holding the persisted stores (`--data-dir`)
//! - `CATALOG_PRODUCTS_URL` - Product listing endpoint (`--products-url`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shopfront_core::ProductId;
use shopfront_storefront::config::{CatalogConfig, data_dir_from_env, parse_products_url};
use url::Url;

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(author, version, about = "Shopfront CLI tools")]
struct Cli {
    /// Directory holding the persisted cart and wishlist [env: `STOREFRONT_DATA_DIR`]
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Product listing endpoint [env: `CATALOG_PRODUCTS_URL`]
    #[arg(long, global = true, value_parser = parse_products_url)]
    products_url: Option<Url>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the products in the upstream catalog
    Products,
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart lines and subtotal
    Show,
    /// Add a catalog product to the cart
    Add {
        /// Product ID
        id: ProductId,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a cart line (0 removes it)
    Set {
        /// Product ID
        id: ProductId,

        /// New quantity
        quantity: u32,
    },
    /// Remove a cart line
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show the wishlist entries
    Show,
    /// Add a catalog product to the wishlist
    Add {
        /// Product ID
        id: ProductId,
    },
    /// Remove a wishlist entry
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Add the product if absent, remove it otherwise
    Toggle {
        /// Product ID
        id: ProductId,
    },
}

#[tokio::main]
async fn main() {
    // Load .env so the environment fallbacks see it
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = cli.data_dir.unwrap_or_else(data_dir_from_env);
    let catalog = match cli.products_url {
        Some(products_url) => CatalogConfig { products_url },
        None => CatalogConfig::from_env()?,
    };
    let ctx = Context::new(data_dir, &catalog);

    match cli.command {
        Commands::Products => commands::products::list(&ctx).await?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&ctx),
            CartAction::Add { id, quantity } => commands::cart::add(&ctx, id, quantity).await?,
            CartAction::Set { id, quantity } => commands::cart::set(&ctx, id, quantity),
            CartAction::Remove { id } => commands::cart::remove(&ctx, id),
            CartAction::Clear => commands::cart::clear(&ctx),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::wishlist::show(&ctx),
            WishlistAction::Add { id } => commands::wishlist::add(&ctx, id).await?,
            WishlistAction::Remove { id } => commands::wishlist::remove(&ctx, id),
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&ctx, id).await?,
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cart_add_with_quantity() {
        let cli = Cli::try_parse_from(["sf-cli", "cart", "add", "3", "-q", "2"]).unwrap();
        match cli.command {
            Commands::Cart {
                action: CartAction::Add { id, quantity },
            } => {
                assert_eq!(id, ProductId::new(3));
                assert_eq!(quantity, 2);
            }
            _ => panic!("expected cart add"),
        }
    }

    #[test]
    fn test_rejects_non_http_products_url() {
        let result = Cli::try_parse_from([
            "sf-cli",
            "--products-url",
            "ftp://example.com/products",
            "products",
        ]);
        assert!(result.is_err());
    }
}
