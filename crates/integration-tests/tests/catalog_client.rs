//! Integration tests for `CatalogClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made.

use serde_json::json;
use shopfront_core::ProductId;
use shopfront_integration_tests::{UNREACHABLE_PRODUCTS_URL, product_fixture, products_url};
use shopfront_storefront::catalog::{CatalogClient, CatalogError};
use shopfront_storefront::config::CatalogConfig;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(url: &str) -> CatalogClient {
    CatalogClient::new(&CatalogConfig {
        products_url: Url::parse(url).expect("valid test URL"),
    })
}

async fn serve(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_products_maps_every_record_in_order() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200).set_body_json(product_fixture()),
    )
    .await;

    let products = client_for(&products_url(&server.uri()))
        .try_fetch_products()
        .await
        .expect("fetch should succeed");

    assert_eq!(products.len(), 3);
    let ids: Vec<i32> = products.iter().map(|p| p.id.as_i32()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let backpack = &products[0];
    assert_eq!(
        backpack.name,
        "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops"
    );
    assert_eq!(backpack.formatted_price(), "$109.95");
    assert_eq!(backpack.category.as_deref(), Some("men's clothing"));
    let rating = backpack.rating.expect("rating present");
    assert_eq!(rating.count, 120);

    assert_eq!(products[1].formatted_price(), "$22.30");
    assert!(products[2].rating.is_none());
}

#[tokio::test]
async fn fetch_products_makes_a_single_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let products = client_for(&products_url(&server.uri()))
        .fetch_products()
        .await;
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn empty_listing_is_not_an_error() {
    let server = MockServer::start().await;
    serve(&server, ResponseTemplate::new(200).set_body_json(json!([]))).await;

    let result = client_for(&products_url(&server.uri()))
        .try_fetch_products()
        .await;

    assert!(result.expect("empty array is valid").is_empty());
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let server = MockServer::start().await;
    serve(&server, ResponseTemplate::new(500)).await;

    let client = client_for(&products_url(&server.uri()));
    let err = client
        .try_fetch_products()
        .await
        .expect_err("500 must fail");
    assert!(matches!(err, CatalogError::Status(500)), "got {err:?}");

    assert!(client.fetch_products().await.is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"products": []})),
    )
    .await;

    let client = client_for(&products_url(&server.uri()));
    let err = client
        .try_fetch_products()
        .await
        .expect_err("object body must fail");
    assert!(matches!(err, CatalogError::Parse(_)), "got {err:?}");

    assert!(client.fetch_products().await.is_empty());
}

#[tokio::test]
async fn one_bad_record_fails_the_whole_listing() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "Ok", "price": 1.0, "description": "", "image": "" },
            { "id": 2, "title": "Bad", "price": -5.0, "description": "", "image": "" }
        ])),
    )
    .await;

    let err = client_for(&products_url(&server.uri()))
        .try_fetch_products()
        .await
        .expect_err("negative price must fail");
    assert!(
        matches!(err, CatalogError::InvalidRecord { id: 2, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn unreachable_endpoint_yields_empty_list() {
    let client = client_for(UNREACHABLE_PRODUCTS_URL);

    let err = client
        .try_fetch_products()
        .await
        .expect_err("nothing listens there");
    assert!(matches!(err, CatalogError::Http(_)), "got {err:?}");

    assert!(client.fetch_products().await.is_empty());
}

#[tokio::test]
async fn find_product_picks_by_id() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200).set_body_json(product_fixture()),
    )
    .await;

    let client = client_for(&products_url(&server.uri()));

    let jacket = client
        .find_product(ProductId::new(3))
        .await
        .expect("fetch should succeed")
        .expect("product 3 exists");
    assert_eq!(jacket.name, "Mens Cotton Jacket");

    let missing = client
        .find_product(ProductId::new(99))
        .await
        .expect("fetch should succeed");
    assert!(missing.is_none());
}
