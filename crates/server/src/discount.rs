//! Bulk discount pipeline.
//!
//! Applies a single percentage discount across a list of products,
//! rewriting every variant's price on Shopify and recording the original
//! price as `compare_at_price`. Products fail independently; one bad id
//! never aborts the batch.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use shopmark_core::DiscountInfo;
use tracing::instrument;

use crate::error::AppError;
use crate::shopify::types::{Product, VariantUpdate, VariantUpdateRequest};
use crate::shopify::{ShopifyClient, ShopifyError};

/// Inbound bulk discount request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDiscountRequest {
    pub product_ids: Vec<String>,
    pub discount_percentage: f64,
}

/// One successfully discounted product, priced from its last variant.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedProduct {
    pub id: String,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub discounted_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub discount_rate: Option<Decimal>,
}

/// One product that could not be discounted, with the reason.
#[derive(Debug, Serialize)]
pub struct FailedProduct {
    pub id: String,
    pub error: String,
}

/// Batch result: every requested id lands in exactly one of the two lists.
#[derive(Debug, Serialize)]
pub struct BulkDiscountOutcome {
    pub processed: Vec<ProcessedProduct>,
    pub failed: Vec<FailedProduct>,
}

/// Validate a bulk discount request and convert the percentage to a
/// decimal.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the id list is empty, contains an
/// empty id, or the percentage is not a finite number in `[0, 100]`. No
/// upstream call happens for an invalid request.
pub fn validate_request(request: &BulkDiscountRequest) -> Result<Decimal, AppError> {
    if request.product_ids.is_empty() {
        return Err(AppError::Validation(
            "productIds must be a non-empty list".to_string(),
        ));
    }
    if request.product_ids.iter().any(|id| id.is_empty()) {
        return Err(AppError::Validation(
            "productIds must not contain empty ids".to_string(),
        ));
    }
    if !request.discount_percentage.is_finite()
        || !(0.0..=100.0).contains(&request.discount_percentage)
    {
        return Err(AppError::Validation(
            "discountPercentage must be a number between 0 and 100".to_string(),
        ));
    }

    Decimal::from_f64(request.discount_percentage).ok_or_else(|| {
        AppError::Validation("discountPercentage must be a representable number".to_string())
    })
}

/// Apply the discount to every requested product, sequentially.
///
/// Failures are isolated per product: a failed fetch or variant update
/// moves that id to the `failed` list and the loop continues.
#[instrument(skip(client, request), fields(count = request.product_ids.len()))]
pub async fn apply_discount(
    client: &ShopifyClient,
    request: &BulkDiscountRequest,
) -> Result<BulkDiscountOutcome, AppError> {
    let percentage = validate_request(request)?;

    let mut processed = Vec::new();
    let mut failed = Vec::new();

    for product_id in &request.product_ids {
        match discount_product(client, product_id, percentage).await {
            Ok(product) => processed.push(product),
            Err(err) => {
                tracing::warn!(product_id, error = %err, "product discount failed");
                failed.push(FailedProduct {
                    id: product_id.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    Ok(BulkDiscountOutcome { processed, failed })
}

/// Discount every variant of one product.
///
/// Each variant's current price becomes its `compare_at_price` and the
/// price is rewritten to `price * (100 - pct) / 100`, rounded to 2 decimal
/// places. The reported prices come from the last variant updated.
async fn discount_product(
    client: &ShopifyClient,
    product_id: &str,
    percentage: Decimal,
) -> Result<ProcessedProduct, ShopifyError> {
    let response = client.get_product(product_id).await?;
    if !response.is_ok() {
        return Err(response.into_error());
    }

    let product: Product = serde_json::from_value(
        response
            .body
            .get("product")
            .cloned()
            .unwrap_or(serde_json::Value::Null),
    )
    .map_err(|e| ShopifyError::ResponseFormat(format!("malformed product record: {e}")))?;

    let multiplier = (Decimal::ONE_HUNDRED - percentage) / Decimal::ONE_HUNDRED;
    let mut last_pair: Option<(Decimal, Decimal)> = None;

    for variant in &product.variants {
        let original = variant.price.unwrap_or(Decimal::ZERO);
        let discounted = (original * multiplier).round_dp(2);

        let update = VariantUpdateRequest {
            variant: VariantUpdate {
                id: variant.id,
                price: discounted,
                compare_at_price: original,
            },
        };

        let response = client.update_variant(variant.id, &update).await?;
        if !response.is_ok() {
            return Err(response.into_error());
        }

        last_pair = Some((discounted, original));
    }

    let (discounted, original) = last_pair.unwrap_or((Decimal::ZERO, Decimal::ZERO));
    let info = DiscountInfo::derive(discounted, original);

    Ok(ProcessedProduct {
        id: product.id.to_string(),
        title: product.title,
        price: info.price,
        discounted_price: info.discounted_price,
        discount_rate: info.discount_rate,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request(ids: &[&str], percentage: f64) -> BulkDiscountRequest {
        BulkDiscountRequest {
            product_ids: ids.iter().map(ToString::to_string).collect(),
            discount_percentage: percentage,
        }
    }

    #[test]
    fn test_validate_rejects_empty_id_list() {
        let err = validate_request(&request(&[], 20.0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let err = validate_request(&request(&["1", ""], 20.0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_out_of_range_percentage() {
        for pct in [-1.0, 100.5, f64::NAN, f64::INFINITY] {
            let err = validate_request(&request(&["1"], pct)).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn test_validate_accepts_boundary_percentages() {
        assert_eq!(
            validate_request(&request(&["1"], 0.0)).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            validate_request(&request(&["1"], 100.0)).unwrap(),
            Decimal::ONE_HUNDRED
        );
    }

    #[test]
    fn test_processed_product_serializes_numeric_prices() {
        let product = ProcessedProduct {
            id: "632910392".to_string(),
            title: "IPod Nano".to_string(),
            price: "200.00".parse().unwrap(),
            discounted_price: Some("100.00".parse().unwrap()),
            discount_rate: Some("50.0".parse().unwrap()),
        };

        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["price"], 200.0);
        assert_eq!(value["discountedPrice"], 100.0);
        assert_eq!(value["discountRate"], 50.0);
    }
}
