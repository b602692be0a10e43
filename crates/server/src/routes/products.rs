//! Catalog listing handler.

use axum::Json;
use axum::extract::{Query, State};
use serde::Serialize;
use shopmark_core::NormalizedProduct;
use tracing::instrument;

use crate::catalog::{self, CatalogQuery, Pagination};
use crate::error::AppError;
use crate::middleware::RequireShopSession;
use crate::shopify::ShopifyClient;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub products: Vec<NormalizedProduct>,
    pub pagination: Pagination,
}

/// `GET /products` - one page of the shop's catalog.
#[instrument(skip(state, session), fields(shop = %session.0.shop_domain()))]
pub async fn list(
    session: RequireShopSession,
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ListResponse>, AppError> {
    let client = ShopifyClient::new(&session.0, &state.api().api_version)?;
    let listing = catalog::list_products(&client, state.api(), &query).await?;

    Ok(Json(ListResponse {
        success: true,
        products: listing.products,
        pagination: listing.pagination,
    }))
}
