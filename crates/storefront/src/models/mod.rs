//! Domain models for storefront.
//!
//! Only the session key layout lives here; cart and shop data are read-only
//! projections of the Storefront API (see [`crate::shopify::types`]).

pub mod session;

pub use session::keys as session_keys;
