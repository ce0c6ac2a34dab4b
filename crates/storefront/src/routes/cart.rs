//! Cart route handlers.
//!
//! The cart lives in the local [`CartStore`](crate::stores::CartStore). Adding
//! takes a fresh product snapshot from the catalog; every other operation works
//! on the stored lines only.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use shopfront_core::ProductId;
use tracing::instrument;

use super::redirect_back;
use super::views::{CartView, HeaderView};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: ProductId,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub header: HeaderView,
    pub cart: CartView,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    state.ensure_hydrated();

    let cart = CartView::from(&*state.cart());

    CartShowTemplate {
        header: HeaderView::from_state(&state),
        cart,
    }
}

/// Add a product to the cart.
///
/// A product already in the cart has its quantity increased.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a zero quantity, `AppError::Catalog` if
/// the catalog cannot be loaded and `AppError::NotFound` if it has no product
/// with the posted id.
#[instrument(skip(state, headers))]
pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    state.ensure_hydrated();

    let quantity = form.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::BadRequest("quantity must be at least 1".to_string()));
    }

    let product = state
        .catalog()
        .find_product(form.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    state.cart().add_quantity(&product, quantity);

    let id = product.id.to_string();
    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", id.as_str())]));

    Ok(redirect_back(&headers, "/cart"))
}

/// Set the quantity of a cart line; zero removes it.
#[instrument(skip(state))]
pub async fn update(State(state): State<AppState>, Form(form): Form<UpdateCartForm>) -> Redirect {
    state.ensure_hydrated();

    if !state.cart().update_quantity(form.product_id, form.quantity) {
        tracing::debug!(product_id = %form.product_id, "Cart update changed nothing");
    }

    Redirect::to("/cart")
}

/// Remove a cart line. Unknown ids are ignored.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Redirect {
    state.ensure_hydrated();

    if state.cart().remove(form.product_id) {
        let id = form.product_id.to_string();
        add_breadcrumb("cart", "Removed from cart", Some(&[("product_id", id.as_str())]));
    }

    Redirect::to("/cart")
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Redirect {
    state.ensure_hydrated();

    if state.cart().clear() {
        add_breadcrumb("cart", "Cleared cart", None);
    }

    Redirect::to("/cart")
}

/// Get cart count badge fragment.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    state.ensure_hydrated();

    CartCountTemplate {
        count: state.cart().item_count(),
    }
}
