//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Index page (inside the root document)
//! GET  /cart                   - Cart page (inside the root document)
//! GET  /checkout               - Redirect to Shopify checkout
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (Storefront API reachable)
//! ```

pub mod cart;
pub mod health;
pub mod home;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the page routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/cart", get(cart::show))
        .route("/checkout", get(cart::checkout))
}

/// Create the health check routes router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}
