//! Application state shared across handlers.

use std::sync::Arc;

use hello_storefront_core::I18n;

use crate::config::StorefrontConfig;
use crate::root::ShopifyContext;
use crate::shopify::StorefrontClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the Storefront client and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    storefront: StorefrontClient,
    shopify_context: ShopifyContext,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let storefront = StorefrontClient::new(&config.shopify);
        let shopify_context = ShopifyContext::from_config(&config.shopify);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                storefront,
                shopify_context,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the Shopify Storefront API client.
    #[must_use]
    pub fn storefront(&self) -> &StorefrontClient {
        &self.inner.storefront
    }

    /// Commerce context handed to every rendered page.
    #[must_use]
    pub fn shopify_context(&self) -> &ShopifyContext {
        &self.inner.shopify_context
    }

    /// Locale the storefront queries and renders with.
    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.inner.config.shopify.i18n
    }
}
