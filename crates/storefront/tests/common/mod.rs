//! Shared harness: a fake Storefront GraphQL server and a configured app.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use hello_storefront::config::{ShopifyStorefrontConfig, StorefrontConfig};
use hello_storefront::middleware::session::SESSION_COOKIE_NAME;
use hello_storefront::state::AppState;
use hello_storefront_core::I18n;
use serde_json::Value;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, Session};

pub const PUBLIC_TOKEN: &str = "3b580e70970c4528da70c98e097c2fa0";
pub const API_VERSION: &str = "2023-01";

pub const CART_RESPONSE: &str = include_str!("../fixtures/cart_response.json");
pub const CART_MISSING_RESPONSE: &str = include_str!("../fixtures/cart_missing_response.json");
pub const LAYOUT_RESPONSE: &str = include_str!("../fixtures/layout_response.json");
pub const ERRORS_RESPONSE: &str = include_str!("../fixtures/errors_response.json");

/// A GraphQL request as the fake server received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub operation: String,
    pub variables: Value,
    pub public_token: Option<String>,
    pub private_token: Option<String>,
}

/// Canned responses per operation.
#[derive(Clone)]
pub struct FakeShopify {
    pub cart_body: &'static str,
    pub layout_body: &'static str,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl Default for FakeShopify {
    fn default() -> Self {
        Self {
            cart_body: CART_RESPONSE,
            layout_body: LAYOUT_RESPONSE,
            requests: Arc::default(),
        }
    }
}

impl FakeShopify {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.operation == operation)
            .count()
    }

    /// Serve on an ephemeral port and return the store origin.
    pub async fn spawn(&self) -> String {
        let router = Router::new()
            .route(&format!("/api/{API_VERSION}/graphql.json"), post(graphql))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{addr}")
    }
}

async fn graphql(
    State(fake): State<FakeShopify>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };

    let operation = body["operationName"].as_str().unwrap_or_default().to_string();
    fake.requests.lock().unwrap().push(RecordedRequest {
        operation: operation.clone(),
        variables: body["variables"].clone(),
        public_token: header_value("x-shopify-storefront-access-token"),
        private_token: header_value("shopify-storefront-private-token"),
    });

    let response_body = match operation.as_str() {
        "CartQuery" => fake.cart_body,
        "layout" => fake.layout_body,
        _ => return StatusCode::BAD_REQUEST.into_response(),
    };

    ([(header::CONTENT_TYPE, "application/json")], response_body).into_response()
}

pub fn shopify_config(store_domain: String) -> ShopifyStorefrontConfig {
    ShopifyStorefrontConfig {
        store_domain,
        api_version: API_VERSION.to_string(),
        storefront_token: PUBLIC_TOKEN.to_string(),
        storefront_private_token: None,
        i18n: I18n::default(),
    }
}

pub fn config(store_domain: String) -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 3000,
        base_url: "http://localhost:3000".to_string(),
        database_url: None,
        shopify: shopify_config(store_domain),
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// The storefront router, wired to a fake Shopify, with a seeded session store.
pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
}

impl TestApp {
    pub async fn new(fake: &FakeShopify) -> Self {
        let origin = fake.spawn().await;
        let store = MemoryStore::default();
        let router = hello_storefront::app(AppState::new(config(origin)), store.clone());
        Self { router, store }
    }

    /// Create a session holding `cartId` and return its cookie header.
    pub async fn session_with_cart(&self, cart_id: &str) -> String {
        let session = Session::new(None, Arc::new(self.store.clone()), None);
        session.insert("cartId", cart_id).await.unwrap();
        session.save().await.unwrap();
        let id = session.id().expect("saved session has an id");
        format!("{SESSION_COOKIE_NAME}={id}")
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
