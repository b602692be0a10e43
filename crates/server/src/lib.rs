//! Shopmark Server - pagination-aware catalog queries and bulk discounts
//! over the Shopify REST Admin API.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod discount;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shopify;
pub mod state;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Build the full application router, including the health probe and
/// request tracing.
pub fn app(state: state::AppState) -> Router {
    routes::router()
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
