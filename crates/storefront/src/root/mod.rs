//! Root document renderer.
//!
//! Loads the cart and shop layout for every page and renders the document
//! shell that page templates are nested in.

pub mod document;
pub mod loader;

pub use document::{Link, MetaTag, RootDocument, RootShell, ShopifyContext, links, meta};
pub use loader::{CartSession, RootData, load_root};
