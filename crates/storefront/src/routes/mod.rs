//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (featured products)
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing
//!
//! # Wishlist
//! GET  /wishlist               - Wishlist page
//! POST /wishlist/toggle        - Add if absent, remove if present
//! POST /wishlist/add           - Add or refresh an entry
//! POST /wishlist/remove        - Remove an entry
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (increments an existing line)
//! POST /cart/update            - Set a line quantity (0 removes)
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart count badge (fragment)
//! ```
//!
//! Product cards link to `/products/{id}`; the detail page is served elsewhere.

pub mod cart;
pub mod home;
pub mod products;
pub mod views;
pub mod wishlist;

use axum::{
    Router,
    http::{HeaderMap, Request, header},
    middleware,
    response::Redirect,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/", get(products::index))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/toggle", post(wishlist::toggle))
        .route("/add", post(wishlist::add))
        .route("/remove", post(wishlist::remove))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Wishlist routes
        .nest("/wishlist", wishlist_routes())
        // Cart routes
        .nest("/cart", cart_routes())
}

/// Build the full application: pages, health check, tracing and request IDs.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .with_state(state)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Redirect to the page the form was posted from.
///
/// Only the path and query of the `Referer` are used, so the redirect never
/// leaves this site. A path that browsers would read as protocol-relative
/// (`//host` or `/\host`) is not usable. Falls back to `fallback` when there
/// is no usable referer.
pub fn redirect_back(headers: &HeaderMap, fallback: &str) -> Redirect {
    let target = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|raw| url::Url::parse(raw).ok())
        .filter(|url| !url.path().starts_with("//") && !url.path().starts_with("/\\"))
        .map(|url| match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_string(),
        });

    target.map_or_else(|| Redirect::to(fallback), |path| Redirect::to(&path))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;
    use axum::response::IntoResponse;

    use super::*;

    fn location(redirect: Redirect) -> String {
        let response = redirect.into_response();
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_redirect_back_uses_referer_path() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::REFERER,
            HeaderValue::from_static("https://evil.example/products?page=2"),
        );
        assert_eq!(location(redirect_back(&headers, "/cart")), "/products?page=2");
    }

    #[test]
    fn test_redirect_back_falls_back() {
        let mut headers = HeaderMap::new();
        assert_eq!(location(redirect_back(&headers, "/cart")), "/cart");

        headers.insert(header::REFERER, HeaderValue::from_static("/relative"));
        assert_eq!(location(redirect_back(&headers, "/wishlist")), "/wishlist");
    }

    #[test]
    fn test_redirect_back_rejects_protocol_relative_path() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::REFERER,
            HeaderValue::from_static("https://shop.example//evil.example/phish"),
        );
        assert_eq!(location(redirect_back(&headers, "/cart")), "/cart");

        headers.insert(
            header::REFERER,
            HeaderValue::from_static("https://shop.example//evil.example/phish?x=1"),
        );
        assert_eq!(location(redirect_back(&headers, "/wishlist")), "/wishlist");
    }
}
