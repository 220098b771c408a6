//! Hello Storefront library.
//!
//! A server-rendered Shopify storefront root: every page is rendered inside a
//! root document whose data (visitor cart, shop name and description) is
//! loaded concurrently from the Storefront API.
//!
//! The binary in `main.rs` wires configuration, tracing and Sentry around
//! [`app`]; integration tests drive [`app`] directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod root;
pub mod routes;
pub mod shopify;
pub mod state;

use axum::{Router, extract::Request};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::SessionStore;

use state::AppState;

/// Directory holding the stylesheet (including hashed copies) and favicon.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build the storefront router over the given session store.
pub fn app<S>(state: AppState, store: S) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = middleware::create_session_layer(store, state.config());

    let pages = routes::routes().layer(axum::middleware::from_fn(
        middleware::security_headers_middleware,
    ));

    Router::new()
        .merge(routes::health_routes())
        .merge(pages)
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(session_layer)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}
