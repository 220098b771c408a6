//! Session-related types.

/// Session keys shared with the cart mutation routes that write them.
pub mod keys {
    /// Key for storing the Shopify cart ID.
    pub const CART_ID: &str = "cartId";
}
