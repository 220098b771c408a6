//! Hello Storefront Core - Shared types library.
//!
//! This crate provides common types used across all Hello Storefront components:
//! - `storefront` - Server-rendered storefront (root document, cart, checkout redirect)
//! - `cli` - Command-line tools for session migrations and offline rendering
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no sessions.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Shopify global IDs, locale codes, and decimal prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
