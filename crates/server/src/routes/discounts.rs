//! Bulk discount handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use tracing::instrument;

use crate::discount::{self, BulkDiscountRequest, FailedProduct, ProcessedProduct};
use crate::error::AppError;
use crate::middleware::RequireShopSession;
use crate::shopify::ShopifyClient;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResponse {
    pub success: bool,
    pub message: String,
    pub products: Vec<ProcessedProduct>,
    pub failed_products: Vec<FailedProduct>,
}

/// `POST /apply-discount` - discount a batch of products.
#[instrument(skip(state, session, payload), fields(shop = %session.0.shop_domain()))]
pub async fn apply(
    session: RequireShopSession,
    State(state): State<AppState>,
    payload: Result<Json<BulkDiscountRequest>, JsonRejection>,
) -> Result<Json<ApplyResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let client = ShopifyClient::new(&session.0, &state.api().api_version)?;
    let outcome = discount::apply_discount(&client, &request).await?;

    Ok(Json(ApplyResponse {
        success: true,
        message: format!("Discount applied to {} products", outcome.processed.len()),
        products: outcome.processed,
        failed_products: outcome.failed,
    }))
}
