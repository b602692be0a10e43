//! Integration tests for Shopmark.
//!
//! Each test spawns the real server on an ephemeral port and a
//! [`wiremock::MockServer`] standing in for the Shopify REST Admin API.
//! The shop session headers carry the mock server's URI as the shop
//! domain, so the client talks to the stand-in over plain HTTP.
//!
//! Run with: `cargo test -p shopmark-integration-tests`

use shopmark_server::config::ShopifyApiConfig;
use shopmark_server::state::AppState;

/// Shop domain header expected on every request.
pub const SHOP_DOMAIN_HEADER: &str = shopmark_server::middleware::session::SHOP_DOMAIN_HEADER;
/// Access token header expected on every request.
pub const ACCESS_TOKEN_HEADER: &str = shopmark_server::middleware::session::ACCESS_TOKEN_HEADER;

/// Spawn the server on an ephemeral port and return its base URL.
pub async fn spawn_app(api: ShopifyApiConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    let app = shopmark_server::app(AppState::new(api));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{addr}")
}

/// Build a reqwest client that sends the shop session headers pointing at
/// the given upstream stand-in.
pub fn shop_client(upstream_uri: &str) -> reqwest::Client {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        SHOP_DOMAIN_HEADER,
        upstream_uri.parse().expect("invalid shop domain header"),
    );
    headers.insert(
        ACCESS_TOKEN_HEADER,
        "shpat_test_token".parse().expect("invalid token header"),
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .expect("Failed to create HTTP client")
}
