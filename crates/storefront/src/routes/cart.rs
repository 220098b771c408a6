//! Cart route handlers.
//!
//! The cart page renders the root data's cart; mutations happen elsewhere and
//! only leave the cart ID in the session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::Redirect};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, add_breadcrumb};
use crate::filters;
use crate::root::{CartSession, RootData, RootShell};
use crate::shopify::StorefrontApi;
use crate::shopify::types::{Cart, CartLine};
use crate::state::AppState;

/// Image display data for templates.
#[derive(Clone)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub variant_title: Option<String>,
    /// `Name: Value` pairs of the selected options.
    pub options: Vec<String>,
    pub quantity: i64,
    pub price: String,
    pub compare_at_price: Option<String>,
    pub line_price: String,
    pub image: Option<ImageView>,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: i64,
    pub subtotal: String,
    pub tax: Option<String>,
    pub duty: Option<String>,
    pub total: String,
    pub discount_codes: Vec<String>,
    pub note: Option<String>,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines.iter().map(CartItemView::from).collect(),
            item_count: cart.total_quantity,
            subtotal: cart.cost.subtotal.display(),
            tax: cart.cost.total_tax.as_ref().map(|m| m.display()),
            duty: cart.cost.total_duty.as_ref().map(|m| m.display()),
            total: cart.cost.total.display(),
            discount_codes: cart
                .discount_codes
                .iter()
                .map(|d| {
                    if d.applicable {
                        d.code.clone()
                    } else {
                        format!("{} (not applicable)", d.code)
                    }
                })
                .collect(),
            note: cart.note.clone(),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        let merchandise = &line.merchandise;
        Self {
            id: line.id.to_string(),
            handle: merchandise.product.handle.clone(),
            title: merchandise.product.title.clone(),
            variant_title: (merchandise.title != "Default Title")
                .then(|| merchandise.title.clone()),
            options: merchandise
                .selected_options
                .iter()
                .filter(|o| o.name != "Title")
                .map(|o| format!("{}: {}", o.name, o.value))
                .collect(),
            quantity: line.quantity,
            price: line.cost.amount_per_quantity.display(),
            compare_at_price: line
                .cost
                .compare_at_amount_per_quantity
                .as_ref()
                .filter(|c| {
                    c.price()
                        .zip(line.cost.amount_per_quantity.price())
                        .is_some_and(|(compare_at, price)| compare_at.amount > price.amount)
                })
                .map(|m| m.display()),
            line_price: line.cost.total_amount.display(),
            image: merchandise.image.as_ref().map(|img| ImageView {
                url: img.url.clone(),
                alt: img
                    .alt_text
                    .clone()
                    .unwrap_or_else(|| merchandise.product.title.clone()),
            }),
        }
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub shell: RootShell,
    pub cart: Option<CartView>,
}

/// Display cart page.
#[instrument(skip_all)]
pub async fn show(State(state): State<AppState>, root: RootData) -> CartShowTemplate {
    CartShowTemplate {
        shell: RootShell::new(&root, state.shopify_context()),
        cart: root.cart.as_ref().filter(|c| !c.is_empty()).map(CartView::from),
    }
}

/// Redirect to Shopify checkout.
///
/// Without a cart (or with an empty one) the visitor goes back to `/cart`.
///
/// # Errors
///
/// Returns an error if the session cannot be read or the cart query fails.
#[instrument(skip_all)]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Result<Redirect, AppError> {
    let Some(cart_id) = session.cart_id().await? else {
        return Ok(Redirect::to("/cart"));
    };

    match state.storefront().cart(&cart_id, state.i18n()).await? {
        Some(cart) if !cart.is_empty() => {
            add_breadcrumb("cart", "Redirected to checkout", Some(&[("cart_id", cart.id.as_str())]));
            Ok(Redirect::to(&cart.checkout_url))
        }
        _ => Ok(Redirect::to("/cart")),
    }
}
