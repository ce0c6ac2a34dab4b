//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod shopping;

pub use id::*;
pub use price::{CurrencyCode, MAX_UNIT_AMOUNT, Price, PriceError};
pub use product::{Product, Rating};
pub use shopping::{CartLine, WishlistEntry};
