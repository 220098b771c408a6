//! Integration tests for pages rendered inside the root document.
//!
//! Each test runs the real router against a local fake Storefront API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use axum::http::{StatusCode, header};
use common::{CART_MISSING_RESPONSE, ERRORS_RESPONSE, FakeShopify, PUBLIC_TOKEN, TestApp, body_text};

const CART_ID: &str = "gid://shopify/Cart/c1-abc123";

#[tokio::test]
async fn index_without_cart_skips_cart_query() {
    let fake = FakeShopify::default();
    let app = TestApp::new(&fake).await;

    let response = app.get("/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("<title>Hydrogen Preview</title>"));
    assert!(html.contains("A custom storefront powered by Hydrogen"));
    assert!(html.contains("Your cart is empty."));
    assert_eq!(fake.count("CartQuery"), 0);
    assert_eq!(fake.count("layout"), 1);
}

#[tokio::test]
async fn head_is_the_same_with_and_without_cart() {
    let fake = FakeShopify::default();
    let app = TestApp::new(&fake).await;
    let cookie = app.session_with_cart(CART_ID).await;

    for cookie in [None, Some(cookie.as_str())] {
        let html = body_text(app.get("/", cookie).await).await;
        let head = html.split("</head>").next().unwrap();

        assert_eq!(head.matches(r#"rel="stylesheet""#).count(), 1);
        assert_eq!(head.matches(r#"rel="preconnect""#).count(), 2);
        assert!(head.contains(r#"href="https://cdn.shopify.com""#));
        assert!(head.contains(r#"href="https://shop.app""#));
        assert_eq!(
            head.matches(r#"<link rel="icon" href="/static/favicon.svg" type="image/svg+xml">"#)
                .count(),
            1
        );
        assert_eq!(head.matches("<meta charset=\"utf-8\">").count(), 1);
        assert_eq!(
            head.matches(r#"name="viewport" content="width=device-width,initial-scale=1""#)
                .count(),
            1
        );
    }
}

#[tokio::test]
async fn session_cart_is_queried_with_locale() {
    let fake = FakeShopify::default();
    let app = TestApp::new(&fake).await;
    let cookie = app.session_with_cart(CART_ID).await;

    let response = app.get("/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    let cart_requests: Vec<_> = fake
        .requests()
        .into_iter()
        .filter(|r| r.operation == "CartQuery")
        .collect();
    assert_eq!(cart_requests.len(), 1);
    assert_eq!(cart_requests[0].variables["cartId"], CART_ID);
    assert_eq!(cart_requests[0].variables["country"], "US");
    assert_eq!(cart_requests[0].variables["language"], "EN");
    assert_eq!(cart_requests[0].public_token.as_deref(), Some(PUBLIC_TOKEN));
    assert_eq!(fake.count("layout"), 1);

    // Header badge and index summary reflect the fetched cart
    assert!(html.contains(r#"data-count="3""#));
    assert!(html.contains("Your cart has 3 items ($150.00)."));
}

#[tokio::test]
async fn cart_is_refetched_on_every_request() {
    let fake = FakeShopify::default();
    let app = TestApp::new(&fake).await;
    let cookie = app.session_with_cart(CART_ID).await;

    for _ in 0..2 {
        assert_eq!(app.get("/", Some(&cookie)).await.status(), StatusCode::OK);
    }

    assert_eq!(fake.count("CartQuery"), 2);
    // Shop metadata is served from the client cache after the first load
    assert_eq!(fake.count("layout"), 1);
}

#[tokio::test]
async fn cart_page_renders_lines_and_totals() {
    let fake = FakeShopify::default();
    let app = TestApp::new(&fake).await;
    let cookie = app.session_with_cart(CART_ID).await;

    let response = app.get("/cart", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("The Hydrogen"));
    assert!(html.contains("154cm / Syntax"));
    assert!(html.contains("Board Wax"));
    assert!(html.contains(r#"<dd class="cart-subtotal">$150.00</dd>"#));
    assert!(html.contains(r#"<dd class="cart-tax">$12.38</dd>"#));
    assert!(html.contains(r#"<dd class="cart-total">$162.38</dd>"#));
    assert!(!html.contains("cart-duty"));
    assert!(html.contains("WELCOME10"));
    assert!(html.contains("Gift wrap please"));
    assert_eq!(html.matches(r#"class="cart-line""#).count(), 2);
}

#[tokio::test]
async fn expired_cart_renders_as_empty() {
    let fake = FakeShopify {
        cart_body: CART_MISSING_RESPONSE,
        ..FakeShopify::default()
    };
    let app = TestApp::new(&fake).await;
    let cookie = app.session_with_cart("gid://shopify/Cart/expired").await;

    let response = app.get("/cart", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("Your cart is empty."));
    assert_eq!(fake.count("CartQuery"), 1);
}

#[tokio::test]
async fn cart_query_error_is_a_bad_gateway() {
    let fake = FakeShopify {
        cart_body: ERRORS_RESPONSE,
        ..FakeShopify::default()
    };
    let app = TestApp::new(&fake).await;
    let cookie = app.session_with_cart(CART_ID).await;

    let response = app.get("/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_text(response).await, "External service error");
}

#[tokio::test]
async fn layout_query_error_is_a_bad_gateway() {
    let fake = FakeShopify {
        layout_body: ERRORS_RESPONSE,
        ..FakeShopify::default()
    };
    let app = TestApp::new(&fake).await;

    let response = app.get("/", None).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn commerce_context_is_embedded() {
    let fake = FakeShopify::default();
    let app = TestApp::new(&fake).await;

    let html = body_text(app.get("/", None).await).await;

    assert!(html.contains(r#"<script type="application/json" id="shopify-config">"#));
    assert!(html.contains(&format!(r#""storefrontToken":"{PUBLIC_TOKEN}""#)));
    assert!(html.contains(r#""storefrontApiVersion":"2023-01""#));
    assert!(html.contains(r#""locale":"en""#));
}

#[tokio::test]
async fn checkout_redirects_to_shopify() {
    let fake = FakeShopify::default();
    let app = TestApp::new(&fake).await;
    let cookie = app.session_with_cart(CART_ID).await;

    let response = app.get("/checkout", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://hydrogen-preview.myshopify.com/cart/c/c1-abc123"
    );
}

#[tokio::test]
async fn checkout_without_cart_goes_to_cart_page() {
    let fake = FakeShopify::default();
    let app = TestApp::new(&fake).await;

    let response = app.get("/checkout", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/cart");
    assert_eq!(fake.count("CartQuery"), 0);
}

#[tokio::test]
async fn pages_carry_security_and_request_id_headers() {
    let fake = FakeShopify::default();
    let app = TestApp::new(&fake).await;

    let response = app.get("/", None).await;
    let headers = response.headers();

    assert!(headers.contains_key("x-request-id"));
    assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY));
    assert_eq!(headers[header::CACHE_CONTROL], "private, no-store");
}

#[tokio::test]
async fn health_endpoints() {
    let fake = FakeShopify::default();
    let app = TestApp::new(&fake).await;

    let response = app.get("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");

    assert_eq!(app.get("/health/ready", None).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn readiness_fails_when_storefront_api_errors() {
    let fake = FakeShopify {
        layout_body: ERRORS_RESPONSE,
        ..FakeShopify::default()
    };
    let app = TestApp::new(&fake).await;

    assert_eq!(
        app.get("/health/ready", None).await.status(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[tokio::test]
async fn favicon_is_served() {
    let fake = FakeShopify::default();
    let app = TestApp::new(&fake).await;

    let response = app.get("/static/favicon.svg", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
}
