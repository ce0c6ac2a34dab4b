//! Wishlist route handlers.
//!
//! Forms post the product snapshot so the wishlist never needs a catalog
//! round trip.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use shopfront_core::{ProductId, WishlistEntry};
use tracing::instrument;

use super::redirect_back;
use super::views::{HeaderView, WishlistItemView};
use crate::error::add_breadcrumb;
use crate::filters;
use crate::state::AppState;

/// Wishlist entry snapshot posted by product cards.
#[derive(Debug, Deserialize)]
pub struct WishlistEntryForm {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl From<WishlistEntryForm> for WishlistEntry {
    fn from(form: WishlistEntryForm) -> Self {
        Self {
            id: form.id,
            name: form.name,
            price: form.price,
            image: form.image,
        }
    }
}

/// Remove from wishlist form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromWishlistForm {
    pub id: ProductId,
}

/// Wishlist page template.
#[derive(Template, WebTemplate)]
#[template(path = "wishlist.html")]
pub struct WishlistTemplate {
    pub header: HeaderView,
    pub items: Vec<WishlistItemView>,
}

/// Display the wishlist page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    state.ensure_hydrated();

    let items = state
        .wishlist()
        .entries()
        .iter()
        .map(WishlistItemView::from)
        .collect();

    WishlistTemplate {
        header: HeaderView::from_state(&state),
        items,
    }
}

/// Add the product if absent, remove it otherwise.
#[instrument(skip(state, headers))]
pub async fn toggle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<WishlistEntryForm>,
) -> Redirect {
    state.ensure_hydrated();

    let id = form.id.to_string();
    let added = state.wishlist().toggle(form.into());
    let message = if added {
        "Added to wishlist"
    } else {
        "Removed from wishlist"
    };
    add_breadcrumb("wishlist", message, Some(&[("product_id", id.as_str())]));

    redirect_back(&headers, "/wishlist")
}

/// Add (or refresh) a wishlist entry.
#[instrument(skip(state, headers))]
pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<WishlistEntryForm>,
) -> Redirect {
    state.ensure_hydrated();

    let id = form.id.to_string();
    state.wishlist().add(form.into());
    add_breadcrumb("wishlist", "Added to wishlist", Some(&[("product_id", id.as_str())]));

    redirect_back(&headers, "/wishlist")
}

/// Remove a wishlist entry. Unknown ids are ignored.
#[instrument(skip(state, headers))]
pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<RemoveFromWishlistForm>,
) -> Redirect {
    state.ensure_hydrated();

    if state.wishlist().remove(form.id) {
        let id = form.id.to_string();
        add_breadcrumb(
            "wishlist",
            "Removed from wishlist",
            Some(&[("product_id", id.as_str())]),
        );
    }

    redirect_back(&headers, "/wishlist")
}
