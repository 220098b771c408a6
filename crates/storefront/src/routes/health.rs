//! Health check endpoints.

use axum::{extract::State, http::StatusCode};

use crate::shopify::StorefrontApi;
use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Ready once the layout query succeeds (served from cache after the first
/// success). Returns 503 Service Unavailable if the Storefront API is not
/// reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.storefront().layout().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
