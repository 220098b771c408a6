//! Integration tests for the Storefront API client against a fake server.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use std::net::SocketAddr;

use axum::{Router, http::StatusCode, routing::post};
use common::{CART_MISSING_RESPONSE, ERRORS_RESPONSE, FakeShopify, PUBLIC_TOKEN, shopify_config};
use hello_storefront::shopify::{ShopifyError, StorefrontApi, StorefrontClient};
use hello_storefront_core::{CartId, I18n};
use secrecy::SecretString;

const PRIVATE_TOKEN: &str = "shpat_9f8A2kQ7zL1mX4vB6nR3tY0wE5uC";

#[tokio::test]
async fn cart_is_converted_from_wire_shape() {
    let fake = FakeShopify::default();
    let client = StorefrontClient::new(&shopify_config(fake.spawn().await));

    let cart = client
        .cart(&CartId::new("gid://shopify/Cart/c1-abc123"), &I18n::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cart.total_quantity, 3);
    assert_eq!(cart.lines.len(), 2);
    assert_eq!(cart.cost.total.display(), "$162.38");
}

#[tokio::test]
async fn public_token_header_by_default() {
    let fake = FakeShopify::default();
    let client = StorefrontClient::new(&shopify_config(fake.spawn().await));

    client.layout().await.unwrap();

    let request = &fake.requests()[0];
    assert_eq!(request.public_token.as_deref(), Some(PUBLIC_TOKEN));
    assert!(request.private_token.is_none());
}

#[tokio::test]
async fn private_token_header_when_configured() {
    let fake = FakeShopify::default();
    let mut config = shopify_config(fake.spawn().await);
    config.storefront_private_token = Some(SecretString::from(PRIVATE_TOKEN));
    let client = StorefrontClient::new(&config);

    client.layout().await.unwrap();

    let request = &fake.requests()[0];
    assert_eq!(request.private_token.as_deref(), Some(PRIVATE_TOKEN));
    assert!(request.public_token.is_none());
}

#[tokio::test]
async fn layout_is_cached_and_cart_is_not() {
    let fake = FakeShopify::default();
    let client = StorefrontClient::new(&shopify_config(fake.spawn().await));
    let cart_id = CartId::new("gid://shopify/Cart/c1-abc123");

    for _ in 0..3 {
        let layout = client.layout().await.unwrap();
        assert_eq!(layout.shop.name, "Hydrogen Preview");
        client.cart(&cart_id, &I18n::default()).await.unwrap();
    }

    assert_eq!(fake.count("layout"), 1);
    assert_eq!(fake.count("CartQuery"), 3);
}

#[tokio::test]
async fn null_cart_is_none() {
    let fake = FakeShopify {
        cart_body: CART_MISSING_RESPONSE,
        ..FakeShopify::default()
    };
    let client = StorefrontClient::new(&shopify_config(fake.spawn().await));

    let cart = client
        .cart(&CartId::new("gid://shopify/Cart/gone"), &I18n::default())
        .await
        .unwrap();

    assert!(cart.is_none());
}

#[tokio::test]
async fn graphql_errors_are_reported() {
    let fake = FakeShopify {
        cart_body: ERRORS_RESPONSE,
        ..FakeShopify::default()
    };
    let client = StorefrontClient::new(&shopify_config(fake.spawn().await));

    let err = client
        .cart(&CartId::new("not-a-gid"), &I18n::default())
        .await
        .unwrap_err();

    let ShopifyError::GraphQL(errors) = &err else {
        panic!("expected GraphQL error, got {err:?}");
    };
    assert_eq!(errors.len(), 1);
    assert!(err.to_string().contains("Variable $cartId of type ID!"));
}

#[tokio::test]
async fn rate_limit_reports_retry_after() {
    let router = Router::new().route(
        "/api/2023-01/graphql.json",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, [("retry-after", "7")], "") }),
    );
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let client = StorefrontClient::new(&shopify_config(format!("http://{addr}")));
    let err = client.layout().await.unwrap_err();

    assert!(matches!(err, ShopifyError::RateLimited(7)));
}

#[tokio::test]
async fn server_errors_are_not_parsed_as_data() {
    let router = Router::new().route(
        "/api/2023-01/graphql.json",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "upstream unavailable") }),
    );
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let client = StorefrontClient::new(&shopify_config(format!("http://{addr}")));
    let err = client.layout().await.unwrap_err();

    assert!(err.to_string().contains("HTTP 503"));
}
