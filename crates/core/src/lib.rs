//! Shopfront Core - Shared types library.
//!
//! This crate provides the types shared by every Shopfront component:
//! - `storefront` - Server-rendered catalog, wishlist and cart pages
//! - `cli` - Command-line access to the same catalog and stores
//!
//! # Architecture
//!
//! The core crate contains only types and pure conversions - no I/O, no HTTP
//! clients, no storage. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, prices, the product view model, and cart/wishlist records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
