//! Response caching for Storefront API queries.

use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::Expiry;

/// How long a query response may be served from the in-process cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Always hit the API and never store the response (cart reads).
    None,
    /// Short-lived (60 seconds).
    #[default]
    Short,
    /// Long-lived (1 hour), for data that rarely changes (shop metadata).
    Long,
}

impl CachePolicy {
    /// Time-to-live for a cached response, `None` if uncached.
    #[must_use]
    pub const fn ttl(self) -> Option<Duration> {
        match self {
            Self::None => None,
            Self::Short => Some(Duration::from_secs(60)),
            Self::Long => Some(Duration::from_secs(60 * 60)),
        }
    }

    /// Label used in tracing fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

/// A cached `data` payload together with the TTL it was stored under.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub data: Arc<serde_json::Value>,
    pub ttl: Duration,
}

/// Per-entry expiry: each response lives for its own policy's TTL.
pub struct ResponseExpiry;

impl Expiry<String, CachedResponse> for ResponseExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedResponse,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedResponse,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Cache key for an operation and its serialized variables.
pub fn cache_key(operation_name: &str, variables: &serde_json::Value) -> String {
    format!("{operation_name}:{variables}")
}
