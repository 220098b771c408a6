//! Shopify Storefront API client.
//!
//! # Architecture
//!
//! - Uses the `graphql_client` query/response envelope for typed operations
//! - Shopify is source of truth - NO local sync, direct API calls
//! - Per-query cache policy backed by `moka` (cart reads are never cached)
//!
//! # Operations
//!
//! - `CartQuery` - full cart state for the visitor's session cart
//! - `layout` - shop name and description for the page shell
//!
//! # Example
//!
//! ```rust,ignore
//! use hello_storefront::shopify::{StorefrontApi, StorefrontClient};
//!
//! let client = StorefrontClient::new(&config.shopify);
//!
//! let layout = client.layout().await?;
//! let cart = client.cart(&cart_id, &config.shopify.i18n).await?;
//! ```

mod storefront;
pub mod types;

pub use storefront::queries;
pub use storefront::{CachePolicy, StorefrontApi, StorefrontClient};
pub use types::*;

use std::fmt;

use thiserror::Error;

/// Errors that can occur when interacting with the Storefront API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

impl ShopifyError {
    /// Build a single-message GraphQL error (non-success status, empty data).
    pub(crate) fn message(message: impl Into<String>) -> Self {
        Self::GraphQL(vec![GraphQLError {
            message: message.into(),
            locations: Vec::new(),
            path: Vec::new(),
        }])
    }
}

/// A GraphQL error returned by the Storefront API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

impl From<graphql_client::Error> for GraphQLError {
    fn from(error: graphql_client::Error) -> Self {
        Self {
            message: error.message,
            locations: error
                .locations
                .unwrap_or_default()
                .into_iter()
                .map(|l| GraphQLErrorLocation {
                    line: i64::from(l.line),
                    column: i64::from(l.column),
                })
                .collect(),
            path: error
                .path
                .unwrap_or_default()
                .into_iter()
                .map(|fragment| match fragment {
                    graphql_client::PathFragment::Key(s) => serde_json::Value::String(s),
                    graphql_client::PathFragment::Index(i) => serde_json::Value::Number(i.into()),
                })
                .collect(),
        }
    }
}

/// Renders `message path: a.0 at line L:C`, omitting empty parts.
impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if !self.message.is_empty() {
            parts.push(self.message.clone());
        }

        if !self.path.is_empty() {
            let path = self
                .path
                .iter()
                .map(|p| match p {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(".");
            parts.push(format!("path: {path}"));
        }

        if let Some(loc) = self.locations.first() {
            parts.push(format!("at line {}:{}", loc.line, loc.column));
        }

        f.write_str(&parts.join(" "))
    }
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let rendered = e.to_string();
            if rendered.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                rendered
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
