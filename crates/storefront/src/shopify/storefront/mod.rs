//! Shopify Storefront API client implementation.
//!
//! Uses the `graphql_client` envelope for typed operations with `reqwest` 0.13
//! for HTTP. Responses are cached per query according to a [`CachePolicy`]
//! using `moka`.

mod cache;
mod conversions;

pub mod queries;

use std::future::Future;
use std::sync::Arc;

use graphql_client::{GraphQLQuery, QueryBody, Response};
use hello_storefront_core::{CartId, I18n};
use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{Span, debug, instrument};

use crate::config::ShopifyStorefrontConfig;
use crate::shopify::ShopifyError;
use crate::shopify::types::{Cart, Layout};

pub use cache::CachePolicy;
use cache::{CachedResponse, ResponseExpiry, cache_key};
use conversions::{convert_cart, convert_layout};
use queries::{CartQuery, LayoutQuery, cart_query, layout_query};

/// Maximum number of cached query responses.
const CACHE_CAPACITY: u64 = 1000;

/// Number of response body characters kept in error logs.
const LOG_BODY_CHARS: usize = 500;

// =============================================================================
// StorefrontApi
// =============================================================================

/// The two storefront reads the root document depends on.
///
/// Implemented by [`StorefrontClient`]; tests substitute recording fakes.
pub trait StorefrontApi: Send + Sync {
    /// Fetch the cart with the given ID, bypassing every cache.
    ///
    /// Returns `Ok(None)` when the API has no such cart (expired or unknown).
    fn cart(
        &self,
        cart_id: &CartId,
        i18n: &I18n,
    ) -> impl Future<Output = Result<Option<Cart>, ShopifyError>> + Send;

    /// Fetch shop name and description.
    fn layout(&self) -> impl Future<Output = Result<Layout, ShopifyError>> + Send;
}

// =============================================================================
// StorefrontClient
// =============================================================================

/// How the client authenticates against the Storefront API.
#[derive(Clone)]
enum AccessToken {
    /// Server-only private token.
    Private(SecretString),
    /// Public (browser-safe) token.
    Public(String),
}

/// Client for the Shopify Storefront API.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

struct StorefrontClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: AccessToken,
    cache: Cache<String, CachedResponse>,
}

impl StorefrontClient {
    /// Create a new Storefront API client.
    ///
    /// Prefers the private token when configured; otherwise authenticates with
    /// the public storefront token.
    #[must_use]
    pub fn new(config: &ShopifyStorefrontConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .expire_after(ResponseExpiry)
            .build();

        let access_token = config.storefront_private_token.as_ref().map_or_else(
            || AccessToken::Public(config.storefront_token.clone()),
            |token| AccessToken::Private(token.clone()),
        );

        Self {
            inner: Arc::new(StorefrontClientInner {
                client: reqwest::Client::new(),
                endpoint: config.graphql_endpoint(),
                access_token,
                cache,
            }),
        }
    }

    /// The GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Run a GraphQL operation under the given cache policy.
    ///
    /// `CachePolicy::None` neither reads nor writes the cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports GraphQL errors,
    /// or the response does not match the operation's shape.
    #[instrument(skip(self, variables), fields(operation = tracing::field::Empty, cache = cache.as_str()))]
    pub async fn query<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
        cache: CachePolicy,
    ) -> Result<Q::ResponseData, ShopifyError> {
        let body = Q::build_query(variables);
        Span::current().record("operation", body.operation_name);

        let cached = match cache.ttl() {
            Some(ttl) => Some((
                cache_key(body.operation_name, &serde_json::to_value(&body.variables)?),
                ttl,
            )),
            None => None,
        };

        if let Some((key, _)) = &cached
            && let Some(hit) = self.inner.cache.get(key).await
        {
            debug!("Cache hit");
            return Ok(Q::ResponseData::deserialize(hit.data.as_ref())?);
        }

        let data = self.execute(&body).await?;
        let response = Q::ResponseData::deserialize(&data)?;

        if let Some((key, ttl)) = cached {
            self.inner
                .cache
                .insert(
                    key,
                    CachedResponse {
                        data: Arc::new(data),
                        ttl,
                    },
                )
                .await;
        }

        Ok(response)
    }

    /// POST a query body and return the raw `data` payload.
    async fn execute<V: serde::Serialize>(
        &self,
        body: &QueryBody<V>,
    ) -> Result<serde_json::Value, ShopifyError> {
        let request = self.inner.client.post(&self.inner.endpoint).json(body);

        // Private access tokens use a different header than public tokens
        // See: https://shopify.dev/docs/storefronts/headless/building-with-the-storefront-api/getting-started
        let request = match &self.inner.access_token {
            AccessToken::Private(token) => {
                request.header("Shopify-Storefront-Private-Token", token.expose_secret())
            }
            AccessToken::Public(token) => {
                request.header("X-Shopify-Storefront-Access-Token", token.as_str())
            }
        };

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ShopifyError::RateLimited(retry_after));
        }

        // Read as text first for better error diagnostics
        let response_text = response.text().await?;
        let snippet = || response_text.chars().take(LOG_BODY_CHARS).collect::<String>();

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %snippet(),
                "Storefront API returned non-success status"
            );
            return Err(ShopifyError::message(format!(
                "HTTP {status}: {}",
                response_text.chars().take(200).collect::<String>()
            )));
        }

        let response: Response<serde_json::Value> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %snippet(),
                    "Failed to parse Storefront GraphQL response"
                );
                return Err(ShopifyError::Parse(e));
            }
        };

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            tracing::debug!(errors = ?errors, "GraphQL errors in response");
            return Err(ShopifyError::GraphQL(
                errors.into_iter().map(Into::into).collect(),
            ));
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                body = %snippet(),
                "Storefront GraphQL response has no data and no errors"
            );
            ShopifyError::message("No data in response")
        })
    }
}

impl StorefrontApi for StorefrontClient {
    #[instrument(skip(self, i18n), fields(cart_id = %cart_id))]
    async fn cart(&self, cart_id: &CartId, i18n: &I18n) -> Result<Option<Cart>, ShopifyError> {
        let variables = cart_query::Variables {
            cart_id: cart_id.to_string(),
            country: Some(i18n.country.to_string()),
            language: Some(i18n.language.to_string()),
        };

        // Cart state changes on every add/remove/update, so it is never cached.
        let data = self
            .query::<CartQuery>(variables, CachePolicy::None)
            .await?;

        if data.cart.is_none() {
            debug!("Cart not found");
        }

        Ok(data.cart.map(convert_cart))
    }

    #[instrument(skip(self))]
    async fn layout(&self) -> Result<Layout, ShopifyError> {
        let data = self
            .query::<LayoutQuery>(layout_query::Variables, CachePolicy::Long)
            .await?;

        Ok(convert_layout(data))
    }
}
