//! `PostgreSQL` connection pool for session storage.
//!
//! Cart and shop data come straight from the Storefront API; the database only
//! backs `tower-sessions` when `STOREFRONT_DATABASE_URL` is set. The session
//! table is created with:
//! ```bash
//! cargo run -p hello-storefront-cli -- migrate sessions
//! ```

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Create a `PostgreSQL` connection pool.
///
/// Sessions are one small read per request, so the pool stays small.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url.expose_secret())
        .await
}
