//! Per-request shop credential.
//!
//! Supplied by the external auth collaborator for every request and never
//! persisted by this system.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors raised when constructing a [`ShopSession`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Shop domain was empty.
    #[error("shop domain must not be empty")]
    EmptyShopDomain,

    /// Access token was empty.
    #[error("access token must not be empty")]
    EmptyAccessToken,
}

/// An authenticated shop identity: `{shop_domain, access_token}`.
///
/// The access token grants Admin API access to the store, so `Debug`
/// redacts it.
#[derive(Clone)]
pub struct ShopSession {
    shop_domain: String,
    access_token: SecretString,
}

impl ShopSession {
    /// Create a session from a shop domain and access token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if either value is empty - an empty
    /// credential is a precondition failure, not something to carry
    /// forward into an upstream call.
    pub fn new(
        shop_domain: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, SessionError> {
        let shop_domain = shop_domain.into();
        if shop_domain.is_empty() {
            return Err(SessionError::EmptyShopDomain);
        }
        let access_token = access_token.into();
        if access_token.is_empty() {
            return Err(SessionError::EmptyAccessToken);
        }
        Ok(Self {
            shop_domain,
            access_token: SecretString::from(access_token),
        })
    }

    /// The shop domain (e.g., `your-store.myshopify.com`).
    #[must_use]
    pub fn shop_domain(&self) -> &str {
        &self.shop_domain
    }

    /// Expose the access token for building the upstream auth header.
    #[must_use]
    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

impl std::fmt::Debug for ShopSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopSession")
            .field("shop_domain", &self.shop_domain)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_session_rejects_empty_shop_domain() {
        let result = ShopSession::new("", "shpat_token");
        assert_eq!(result.unwrap_err(), SessionError::EmptyShopDomain);
    }

    #[test]
    fn test_session_rejects_empty_access_token() {
        let result = ShopSession::new("test.myshopify.com", "");
        assert_eq!(result.unwrap_err(), SessionError::EmptyAccessToken);
    }

    #[test]
    fn test_session_debug_redacts_access_token() {
        let session = ShopSession::new("test.myshopify.com", "shpat_super_secret").unwrap();

        let debug_output = format!("{session:?}");

        assert!(debug_output.contains("test.myshopify.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("shpat_super_secret"));
    }

    #[test]
    fn test_session_exposes_token_for_headers() {
        let session = ShopSession::new("test.myshopify.com", "shpat_token").unwrap();
        assert_eq!(session.access_token(), "shpat_token");
    }
}
