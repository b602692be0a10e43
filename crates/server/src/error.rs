//! Unified error handling for the catalog API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::shopify::ShopifyError;

/// Application-level error type for catalog requests.
///
/// Everything here is a whole-request failure. Per-item failures inside the
/// bulk discount loop never become an `AppError` - they are collected into
/// the outcome's `failed` list instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// No shop session was resolved for this request.
    #[error("Missing shop session: {0}")]
    MissingSession(String),

    /// The request body or parameters failed validation.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Talking to Shopify failed (transport, application, or shape).
    #[error("Shopify error: {0}")]
    Shopify(#[from] ShopifyError),
}

impl AppError {
    /// Short category label for the `error` field of failure bodies.
    const fn label(&self) -> &'static str {
        match self {
            Self::MissingSession(_) => "Missing session",
            Self::Validation(_) => "Invalid request",
            Self::Shopify(_) => "Shopify API error",
        }
    }
}

impl From<shopmark_core::SessionError> for AppError {
    fn from(err: shopmark_core::SessionError) -> Self {
        Self::MissingSession(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "catalog request failed");

        // All request-level failures are 500 to the caller; the upstream
        // message is user-facing, internal detail stays in the logs.
        let body = json!({
            "success": false,
            "error": self.label(),
            "message": self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Validation("discountPercentage must be between 0 and 100".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid request: discountPercentage must be between 0 and 100"
        );
    }

    #[test]
    fn test_all_request_failures_map_to_500() {
        for err in [
            AppError::MissingSession("no shop session on request".to_string()),
            AppError::Validation("productIds must be a non-empty list".to_string()),
            AppError::Shopify(ShopifyError::Api {
                status: 404,
                message: "Not Found".to_string(),
            }),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_session_error_converts_to_missing_session() {
        let err: AppError = shopmark_core::SessionError::EmptyShopDomain.into();
        assert!(matches!(err, AppError::MissingSession(_)));
    }
}
