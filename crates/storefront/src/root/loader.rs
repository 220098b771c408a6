//! Root data loading.
//!
//! Every page is rendered inside the root document, which needs the visitor's
//! cart and the shop's name/description. Both are fetched concurrently; the
//! cart query is skipped entirely when the session holds no cart ID.

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use hello_storefront_core::{CartId, I18n};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::models::session_keys;
use crate::shopify::types::{Cart, Layout};
use crate::shopify::StorefrontApi;
use crate::state::AppState;

/// Read access to the session's cart ID.
pub trait CartSession: Send + Sync {
    /// The cart ID associated with this visitor, if any.
    fn cart_id(
        &self,
    ) -> impl Future<Output = Result<Option<CartId>, tower_sessions::session::Error>> + Send;
}

impl CartSession for Session {
    async fn cart_id(&self) -> Result<Option<CartId>, tower_sessions::session::Error> {
        let cart_id = self.get::<String>(session_keys::CART_ID).await?;
        Ok(cart_id.filter(|id| !id.is_empty()).map(CartId::new))
    }
}

/// A fixed cart ID, for rendering outside a request.
impl CartSession for Option<CartId> {
    async fn cart_id(&self) -> Result<Option<CartId>, tower_sessions::session::Error> {
        Ok(self.clone())
    }
}

/// Data every page receives from the root loader.
#[derive(Debug, Clone)]
pub struct RootData {
    /// The visitor's cart; `None` without a session cart or when it expired.
    pub cart: Option<Cart>,
    /// Shop metadata for the page shell.
    pub layout: Layout,
}

impl RootData {
    /// Number of items in the cart (0 without a cart).
    #[must_use]
    pub fn cart_count(&self) -> i64 {
        self.cart.as_ref().map_or(0, |cart| cart.total_quantity)
    }
}

/// Load the root data for one request.
///
/// The cart query and the layout query run concurrently. A failure in either
/// fails the whole load; there is no retry and no fallback to an empty cart.
///
/// # Errors
///
/// Returns `AppError::Session` if the session cannot be read and
/// `AppError::Shopify` if either Storefront query fails.
#[instrument(skip_all, fields(has_cart = tracing::field::Empty))]
pub async fn load_root<S, A>(session: &S, api: &A, i18n: &I18n) -> Result<RootData, AppError>
where
    S: CartSession,
    A: StorefrontApi,
{
    let cart_id = session.cart_id().await?;
    tracing::Span::current().record("has_cart", cart_id.is_some());

    let cart = async {
        match &cart_id {
            Some(id) => api.cart(id, i18n).await,
            None => Ok(None),
        }
    };

    let (cart, layout) = tokio::try_join!(cart, api.layout())?;

    Ok(RootData { cart, layout })
}

impl FromRequestParts<AppState> for RootData {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))?;

        load_root(&session, state.storefront(), state.i18n()).await
    }
}
