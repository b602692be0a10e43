//! The stable, UI-facing product shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::ProductStatus;

/// A flat product summary row produced from upstream catalog records.
///
/// Upstream products carry many variants and images; this shape is derived
/// from the first variant and first image only. `id` is always a string -
/// downstream systems select rows by string identity, so upstream numeric
/// identifiers must not leak as numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProduct {
    pub id: String,
    pub title: String,
    pub status: ProductStatus,
    pub vendor: String,
    /// Displayed price (the compare-at price when the product is discounted).
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Selling price when discounted, otherwise absent.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub discounted_price: Option<Decimal>,
    /// Discount percentage (0-100, one decimal) when discounted.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub discount_rate: Option<Decimal>,
    /// URL of the first product image, if any.
    pub image: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_with_numeric_prices() {
        let product = NormalizedProduct {
            id: "632910392".to_string(),
            title: "IPod Nano".to_string(),
            status: ProductStatus::Active,
            vendor: "Apple".to_string(),
            price: "100.00".parse().unwrap(),
            discounted_price: Some("80.00".parse().unwrap()),
            discount_rate: Some("20.0".parse().unwrap()),
            image: None,
        };

        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["id"], "632910392");
        assert_eq!(value["status"], "active");
        assert_eq!(value["price"], 100.0);
        assert_eq!(value["discountedPrice"], 80.0);
        assert_eq!(value["discountRate"], 20.0);
        assert!(value["image"].is_null());
    }

    #[test]
    fn test_absent_discount_fields_serialize_as_null() {
        let product = NormalizedProduct {
            id: "1".to_string(),
            title: "Plain".to_string(),
            status: ProductStatus::Draft,
            vendor: String::new(),
            price: Decimal::ZERO,
            discounted_price: None,
            discount_rate: None,
            image: None,
        };

        let value = serde_json::to_value(&product).unwrap();

        assert!(value["discountedPrice"].is_null());
        assert!(value["discountRate"].is_null());
    }
}
