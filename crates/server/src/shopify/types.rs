//! Upstream record shapes for the REST Admin API.
//!
//! These mirror what Shopify actually sends: ids are numeric, money fields
//! are decimal strings, and almost everything else is optional. Required vs
//! optional is made explicit here so the rest of the crate never has to
//! trust upstream JSON shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopmark_core::ProductStatus;

/// One product record from `products.json` / `products/{id}.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub images: Vec<Image>,
    /// Shopify also exposes a single featured image alongside `images`.
    #[serde(default)]
    pub image: Option<Image>,
}

/// A purchasable SKU-level unit belonging to a product.
#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    pub id: u64,
    /// Current selling price (decimal string on the wire).
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Pre-discount reference price, when one is set.
    #[serde(default)]
    pub compare_at_price: Option<Decimal>,
}

/// A product image.
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub src: Option<String>,
}

/// Request body for `PUT variants/{id}.json`.
///
/// `Decimal` serializes as a decimal string, which is the format the
/// Admin API expects for money fields.
#[derive(Debug, Serialize)]
pub struct VariantUpdateRequest {
    pub variant: VariantUpdate,
}

/// The price fields rewritten by the bulk discount pipeline.
#[derive(Debug, Serialize)]
pub struct VariantUpdate {
    pub id: u64,
    pub price: Decimal,
    pub compare_at_price: Decimal,
}
