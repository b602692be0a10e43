//! HTTP surface: catalog listing and bulk discounts.

pub mod discounts;
pub mod products;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the API router.
///
/// Every operation is mounted both bare and under `/api`, so the service
/// works behind a stripping proxy and when called directly.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list))
        .route("/api/products", get(products::list))
        .route("/apply-discount", post(discounts::apply))
        .route("/api/apply-discount", post(discounts::apply))
}
