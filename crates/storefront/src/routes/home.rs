//! Index route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::filters;
use crate::root::{RootData, RootShell};
use crate::routes::cart::CartView;
use crate::state::AppState;

/// Index page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub shell: RootShell,
    pub cart: Option<CartView>,
}

/// Display the index page inside the root document.
#[instrument(skip_all)]
pub async fn index(State(state): State<AppState>, root: RootData) -> IndexTemplate {
    IndexTemplate {
        shell: RootShell::new(&root, state.shopify_context()),
        cart: root.cart.as_ref().map(CartView::from),
    }
}
