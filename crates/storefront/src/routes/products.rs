//! Product listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::views::{HeaderView, ProductCardView};
use crate::filters;
use crate::state::AppState;

/// Message shown when the catalog request fails.
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load products. Please try again later.";

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub header: HeaderView,
    pub products: Vec<ProductCardView>,
    /// Set when the catalog could not be loaded.
    pub error: Option<String>,
}

/// Display the product listing page.
///
/// Unlike the home page this keeps the failure apart from an empty catalog.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    state.ensure_hydrated();

    let (products, error) = match state.catalog().try_fetch_products().await {
        Ok(products) => (products, None),
        Err(e) => {
            tracing::error!(error = %e, "Error loading products");
            (Vec::new(), Some(LOAD_ERROR_MESSAGE.to_string()))
        }
    };

    let products = ProductCardView::grid(&products, &state.wishlist());

    ProductsIndexTemplate {
        header: HeaderView::from_state(&state),
        products,
        error,
    }
}
