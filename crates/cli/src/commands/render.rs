//! Render the root document without running the server.
//!
//! Runs the same loader as a page request against the configured Storefront
//! API, with the cart ID taken from the command line instead of a session.
//!
//! ```bash
//! hello-storefront-cli render --cart-id gid://shopify/Cart/c1-abc123
//! ```

use askama::Template;
use hello_storefront::config::StorefrontConfig;
use hello_storefront::root::{RootDocument, RootShell, load_root};
use hello_storefront::state::AppState;
use hello_storefront_core::CartId;

/// Load root data and print the rendered document to stdout.
///
/// # Errors
///
/// Returns an error if configuration is invalid, a Storefront query fails, or
/// the template cannot be rendered.
pub async fn root(cart_id: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::new(config);

    let cart_id = cart_id.map(CartId::new);
    let data = load_root(&cart_id, state.storefront(), state.i18n()).await?;

    match &data.cart {
        Some(cart) => tracing::info!(lines = cart.lines.len(), "Cart loaded"),
        None if cart_id.is_some() => tracing::warn!("Cart not found"),
        None => {}
    }

    let document = RootDocument {
        shell: RootShell::new(&data, state.shopify_context()),
    };

    #[allow(clippy::print_stdout)]
    {
        println!("{}", document.render()?);
    }

    Ok(())
}
