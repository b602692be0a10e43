//! Catalog query pipeline: filter/sort/cursor request in, normalized
//! product page out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopmark_core::{DiscountInfo, NormalizedProduct};
use tracing::instrument;

use crate::config::ShopifyApiConfig;
use crate::shopify::pagination::PAGE_INFO_PARAM;
use crate::shopify::types::Product;
use crate::shopify::{ShopifyClient, ShopifyError, parse_link_header};

/// UI-level catalog filter request.
///
/// All fields are optional; absent (or empty) fields are omitted from the
/// upstream query rather than sent as empty values. `cursor` is an opaque
/// token previously issued by this system, never constructed by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    pub status: Option<String>,
    pub vendor: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    /// Free-text title search (`query` on the inbound surface).
    #[serde(rename = "query")]
    pub title_search: Option<String>,
    /// Opaque pagination cursor (`page_info` on the inbound surface).
    #[serde(rename = "page_info")]
    pub cursor: Option<String>,
}

/// Outward pagination block.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub previous_page_info: Option<String>,
    pub next_page_info: Option<String>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// One page of normalized products plus its cursors.
#[derive(Debug, Serialize)]
pub struct ProductListing {
    pub products: Vec<NormalizedProduct>,
    pub pagination: Pagination,
}

/// Fetch one page of the shop's catalog.
///
/// Issues exactly one upstream `GET products.json` - a returned cursor is
/// never followed automatically.
///
/// # Errors
///
/// - [`ShopifyError::Api`] on a non-200 upstream status, carrying the
///   formatted upstream error message.
/// - [`ShopifyError::ResponseFormat`] on a 200 whose body lacks a
///   well-formed `products` array.
/// - [`ShopifyError::Http`] on transport failure.
#[instrument(skip(client, api))]
pub async fn list_products(
    client: &ShopifyClient,
    api: &ShopifyApiConfig,
    query: &CatalogQuery,
) -> Result<ProductListing, ShopifyError> {
    let response = client.list_products(&build_query(api, query)).await?;

    if !response.is_ok() {
        return Err(response.into_error());
    }

    let items = response
        .body
        .get("products")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| {
            ShopifyError::ResponseFormat("response body has no products array".to_string())
        })?;

    let products = items
        .iter()
        .map(|item| {
            serde_json::from_value::<Product>(item.clone())
                .map(|product| normalize_product(&product))
                .map_err(|e| ShopifyError::ResponseFormat(format!("malformed product record: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let cursors = parse_link_header(response.link_header.as_deref());
    let pagination = Pagination {
        has_previous: cursors.has_previous(),
        has_next: cursors.has_next(),
        previous_page_info: cursors.previous,
        next_page_info: cursors.next,
    };

    tracing::debug!(count = products.len(), "catalog page fetched");

    Ok(ProductListing {
        products,
        pagination,
    })
}

/// Map one upstream product record to the UI-stable shape.
///
/// Derived from the first variant and first image only; a product with no
/// variants normalizes to price 0, one with no images to `image: None`.
#[must_use]
pub fn normalize_product(product: &Product) -> NormalizedProduct {
    let first_variant = product.variants.first();
    let price = first_variant
        .and_then(|v| v.price)
        .unwrap_or(Decimal::ZERO);
    let compare_at = first_variant
        .and_then(|v| v.compare_at_price)
        .unwrap_or(Decimal::ZERO);
    let info = DiscountInfo::derive(price, compare_at);

    let image = product
        .images
        .first()
        .and_then(|img| img.src.clone())
        .or_else(|| product.image.as_ref().and_then(|img| img.src.clone()));

    NormalizedProduct {
        id: product.id.to_string(),
        title: product.title.clone(),
        status: product.status,
        vendor: product.vendor.clone(),
        price: info.price,
        discounted_price: info.discounted_price,
        discount_rate: info.discount_rate,
        image,
    }
}

/// Build the upstream query: fixed page size and field list, plus every
/// non-empty filter field, plus the caller's cursor round-tripped back into
/// `page_info`.
fn build_query(api: &ShopifyApiConfig, query: &CatalogQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("limit", api.page_size.to_string()),
        ("fields", api.product_fields.clone()),
    ];

    push_if_present(&mut params, "status", query.status.as_deref());
    push_if_present(&mut params, "vendor", query.vendor.as_deref());
    push_if_present(&mut params, "price_min", query.price_min.as_deref());
    push_if_present(&mut params, "price_max", query.price_max.as_deref());
    push_if_present(&mut params, "title", query.title_search.as_deref());
    push_if_present(&mut params, PAGE_INFO_PARAM, query.cursor.as_deref());

    params
}

fn push_if_present(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value
        && !value.is_empty()
    {
        params.push((key, value.to_string()));
    }
}
