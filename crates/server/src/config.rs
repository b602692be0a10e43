//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPMARK_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOPMARK_PORT` - Listen port (default: 3002)
//! - `SHOPIFY_API_VERSION` - REST Admin API version (default: 2026-01)
//! - `CATALOG_PAGE_SIZE` - Products per catalog page (default: 20)
//!
//! The shop credential is NOT configuration: it arrives per request from the
//! external auth collaborator (see `middleware::session`).

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Default REST Admin API version.
pub const DEFAULT_API_VERSION: &str = "2026-01";

/// Default number of products requested per catalog page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Fields requested from the upstream `products.json` endpoint. Keeping the
/// list fixed keeps response payloads small and the normalizer's input stable.
pub const PRODUCT_FIELDS: &str = "id,title,status,vendor,variants,images,image";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Upstream Shopify REST Admin API parameters.
///
/// Expressed as a struct rather than scattered literals so tests can
/// override the page size.
#[derive(Debug, Clone)]
pub struct ShopifyApiConfig {
    /// REST Admin API version segment (e.g., 2026-01).
    pub api_version: String,
    /// Products requested per catalog page.
    pub page_size: u32,
    /// Comma-separated field list sent with every catalog query.
    pub product_fields: String,
}

impl Default for ShopifyApiConfig {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            product_fields: PRODUCT_FIELDS.to_string(),
        }
    }
}

impl ShopifyApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_version = get_env_or_default("SHOPIFY_API_VERSION", DEFAULT_API_VERSION);
        let page_size = get_env_or_default("CATALOG_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())
            .parse::<u32>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_PAGE_SIZE".to_string(), e.to_string())
            })?;

        Ok(Self {
            api_version,
            page_size,
            product_fields: PRODUCT_FIELDS.to_string(),
        })
    }
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Upstream API parameters.
    pub api: ShopifyApiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SHOPMARK_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPMARK_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SHOPMARK_PORT", "3002")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPMARK_PORT".to_string(), e.to_string()))?;
        let api = ShopifyApiConfig::from_env()?;

        Ok(Self { host, port, api })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
