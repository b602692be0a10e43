//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ShopifyApiConfig;

/// Application state shared across all handlers.
///
/// Holds only the upstream API parameters: the Shopify client itself is
/// built per request from the session credential, so nothing credential-
/// bearing lives here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    api: ShopifyApiConfig,
}

impl AppState {
    /// Create application state from the upstream API configuration.
    #[must_use]
    pub fn new(api: ShopifyApiConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { api }),
        }
    }

    /// Upstream API parameters (version, page size, field list).
    #[must_use]
    pub fn api(&self) -> &ShopifyApiConfig {
        &self.inner.api
    }
}
