//! Shopify REST Admin API client.
//!
//! # Architecture
//!
//! - One [`ShopifyClient`] per request, bound to the shop credential the
//!   external auth layer resolved for that request
//! - Non-2xx upstream statuses are ordinary results, not errors: Shopify
//!   returns structured error bodies that must reach the end user, so the
//!   client hands back status + body and callers decide what is fatal
//! - Cursor pagination decoded from the `Link` response header

pub mod client;
pub mod pagination;
pub mod types;

pub use client::{ApiResponse, ShopifyClient};
pub use pagination::{PageCursors, parse_link_header};

use serde_json::Value;
use thiserror::Error;

/// Message used when an upstream error body has no recognizable shape.
pub const FALLBACK_ERROR_MESSAGE: &str = "Unknown error from Shopify";

/// Errors that can occur when talking to the Shopify REST Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// Network-level failure (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream replied with a non-2xx status and a structured error body.
    #[error("Shopify API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Upstream replied 200 but the body is missing expected fields.
    #[error("unexpected Shopify response shape: {0}")]
    ResponseFormat(String),

    /// The shop domain cannot be turned into a usable base URL.
    #[error("invalid shop domain \"{shop_domain}\": {reason}")]
    InvalidShopDomain { shop_domain: String, reason: String },

    /// The access token cannot be sent as an HTTP header value.
    #[error("access token is not a valid header value")]
    InvalidAccessToken,
}

/// Normalize an upstream `errors` payload into one display string.
///
/// Shopify error bodies carry `errors` as a plain string, a list of strings,
/// or a list of lists. Strings pass through unchanged; lists are flattened
/// one level and joined with `". "`, nested lists joined the same way. Any
/// other shape yields [`FALLBACK_ERROR_MESSAGE`].
#[must_use]
pub fn format_api_errors(errors: &Value) -> String {
    match errors {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(flatten_entry).collect::<Vec<_>>().join(". "),
        _ => FALLBACK_ERROR_MESSAGE.to_string(),
    }
}

fn flatten_entry(entry: &Value) -> String {
    match entry {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(flatten_entry).collect::<Vec<_>>().join(". "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_errors_pass_through() {
        assert_eq!(format_api_errors(&json!("Not Found")), "Not Found");
    }

    #[test]
    fn test_list_errors_are_joined() {
        let errors = json!(["price must be positive", "title can't be blank"]);
        assert_eq!(
            format_api_errors(&errors),
            "price must be positive. title can't be blank"
        );
    }

    #[test]
    fn test_nested_lists_are_joined_the_same_way() {
        let errors = json!([["first", "second"], "third"]);
        assert_eq!(format_api_errors(&errors), "first. second. third");
    }

    #[test]
    fn test_unrecognized_shape_yields_fallback() {
        let errors = json!({"base": ["boom"]});
        assert_eq!(format_api_errors(&errors), FALLBACK_ERROR_MESSAGE);

        assert_eq!(format_api_errors(&Value::Null), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_formatting_is_idempotent_per_payload() {
        let errors = json!([["a"], "b"]);
        assert_eq!(format_api_errors(&errors), format_api_errors(&errors));
    }

    #[test]
    fn test_shopify_error_display() {
        let err = ShopifyError::Api {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Shopify API error (404): Not Found");
    }
}
