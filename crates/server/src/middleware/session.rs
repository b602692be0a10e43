//! Shop session extraction.
//!
//! Every catalog operation runs against one shop's Admin API, so handlers
//! take [`RequireShopSession`] to get the credential or fail early. The
//! session is resolved from request extensions first (placed there by an
//! upstream auth layer or a test), falling back to the per-request
//! credential headers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shopmark_core::ShopSession;

use crate::error::AppError;

/// Header naming the shop the request operates on.
pub const SHOP_DOMAIN_HEADER: &str = "x-shop-domain";
/// Header carrying the shop's Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "x-shopify-access-token";

/// Extractor that requires a shop session on the request.
pub struct RequireShopSession(pub ShopSession);

impl<S> FromRequestParts<S> for RequireShopSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<ShopSession>() {
            return Ok(Self(session.clone()));
        }

        let shop_domain = header_value(parts, SHOP_DOMAIN_HEADER);
        let access_token = header_value(parts, ACCESS_TOKEN_HEADER);

        match (shop_domain, access_token) {
            (Some(shop_domain), Some(access_token)) => {
                Ok(Self(ShopSession::new(shop_domain, access_token)?))
            }
            _ => Err(AppError::MissingSession(
                "no shop session on request".to_string(),
            )),
        }
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_for(request: Request<()>) -> Parts {
        request.into_parts().0
    }

    #[tokio::test]
    async fn test_extracts_session_from_headers() {
        let mut parts = parts_for(
            Request::builder()
                .header(SHOP_DOMAIN_HEADER, "test.myshopify.com")
                .header(ACCESS_TOKEN_HEADER, "shpat_token")
                .body(())
                .unwrap(),
        );

        let RequireShopSession(session) =
            RequireShopSession::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(session.shop_domain(), "test.myshopify.com");
        assert_eq!(session.access_token(), "shpat_token");
    }

    #[tokio::test]
    async fn test_prefers_session_from_extensions() {
        let session = ShopSession::new("ext.myshopify.com", "shpat_ext").unwrap();
        let mut request = Request::builder().body(()).unwrap();
        request.extensions_mut().insert(session);
        let mut parts = parts_for(request);

        let RequireShopSession(session) =
            RequireShopSession::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(session.shop_domain(), "ext.myshopify.com");
    }

    #[tokio::test]
    async fn test_missing_headers_are_rejected() {
        let mut parts = parts_for(Request::builder().body(()).unwrap());

        let err = RequireShopSession::from_request_parts(&mut parts, &())
            .await
            .map(|_| ())
            .unwrap_err();

        assert!(matches!(err, AppError::MissingSession(_)));
    }

    #[tokio::test]
    async fn test_empty_header_values_are_rejected() {
        let mut parts = parts_for(
            Request::builder()
                .header(SHOP_DOMAIN_HEADER, "")
                .header(ACCESS_TOKEN_HEADER, "shpat_token")
                .body(())
                .unwrap(),
        );

        let err = RequireShopSession::from_request_parts(&mut parts, &())
            .await
            .map(|_| ())
            .unwrap_err();

        assert!(matches!(err, AppError::MissingSession(_)));
    }
}
