//! Type conversion functions for Shopify Storefront API responses.

pub mod cart;
pub mod shop;

pub use cart::convert_cart;
pub use shop::convert_layout;
