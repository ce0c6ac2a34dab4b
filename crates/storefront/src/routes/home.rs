//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::views::{HeaderView, ProductCardView};
use crate::filters;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub header: HeaderView,
    /// Featured products; empty when the catalog could not be loaded.
    pub products: Vec<ProductCardView>,
}

/// Display the home page.
///
/// Catalog failures degrade to the "No products available." state.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    state.ensure_hydrated();

    let products = state.catalog().fetch_products().await;

    let products = ProductCardView::grid(&products, &state.wishlist());

    HomeTemplate {
        header: HeaderView::from_state(&state),
        products,
    }
}
