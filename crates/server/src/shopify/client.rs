//! Per-request HTTP client bound to one shop's Admin API.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, LINK};
use serde_json::Value;
use shopmark_core::ShopSession;
use tracing::instrument;
use url::Url;

use super::types::VariantUpdateRequest;
use super::{ShopifyError, format_api_errors};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Access-token header carried on every Admin API call.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// One upstream response: status, pagination header, parsed body.
///
/// Non-2xx statuses are delivered through this type rather than raised, so
/// pipelines can surface the structured error body to the end user. A body
/// that is not JSON parses to `Value::Null`.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub link_header: Option<String>,
    pub body: Value,
}

impl ApiResponse {
    /// Whether the upstream call succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.is_success()
    }

    /// Convert a non-2xx response into an error carrying the formatted
    /// upstream message.
    #[must_use]
    pub fn into_error(self) -> ShopifyError {
        let errors = self.body.get("errors").unwrap_or(&Value::Null);
        ShopifyError::Api {
            status: self.status.as_u16(),
            message: format_api_errors(errors),
        }
    }
}

/// HTTP client for one shop's REST Admin API.
///
/// Bound at construction to `https://{shop_domain}/admin/api/{version}/`
/// with the access-token header applied to every request. Built per request
/// from the session credential; holds no state beyond the connection pool.
pub struct ShopifyClient {
    http: reqwest::Client,
    base_url: Url,
    shop_domain: String,
}

impl ShopifyClient {
    /// Build a client for the given shop credential.
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError::InvalidShopDomain`] if the domain does not
    /// form a valid base URL, [`ShopifyError::InvalidAccessToken`] if the
    /// token cannot be sent as a header, or [`ShopifyError::Http`] if the
    /// underlying client cannot be constructed.
    pub fn new(session: &ShopSession, api_version: &str) -> Result<Self, ShopifyError> {
        let origin = shop_origin(session.shop_domain());
        let base = format!("{origin}/admin/api/{api_version}/");
        let base_url = Url::parse(&base).map_err(|e| ShopifyError::InvalidShopDomain {
            shop_domain: session.shop_domain().to_string(),
            reason: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        let mut token = HeaderValue::from_str(session.access_token())
            .map_err(|_| ShopifyError::InvalidAccessToken)?;
        token.set_sensitive(true);
        headers.insert(ACCESS_TOKEN_HEADER, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url,
            shop_domain: session.shop_domain().to_string(),
        })
    }

    /// `GET products.json` with the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure; inspect
    /// [`ApiResponse::status`] for upstream application errors.
    #[instrument(skip(self, query), fields(shop = %self.shop_domain))]
    pub async fn list_products(
        &self,
        query: &[(&str, String)],
    ) -> Result<ApiResponse, ShopifyError> {
        let url = self.endpoint("products.json")?;
        self.execute(self.http.get(url).query(query)).await
    }

    /// `GET products/{id}.json`.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    #[instrument(skip(self), fields(shop = %self.shop_domain))]
    pub async fn get_product(&self, product_id: &str) -> Result<ApiResponse, ShopifyError> {
        let url = self.endpoint(&format!("products/{product_id}.json"))?;
        self.execute(self.http.get(url)).await
    }

    /// `PUT variants/{id}.json` with new price fields.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    #[instrument(skip(self, update), fields(shop = %self.shop_domain))]
    pub async fn update_variant(
        &self,
        variant_id: u64,
        update: &VariantUpdateRequest,
    ) -> Result<ApiResponse, ShopifyError> {
        let url = self.endpoint(&format!("variants/{variant_id}.json"))?;
        self.execute(self.http.put(url).json(update)).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ShopifyError> {
        self.base_url
            .join(path)
            .map_err(|e| ShopifyError::InvalidShopDomain {
                shop_domain: self.shop_domain.clone(),
                reason: e.to_string(),
            })
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<ApiResponse, ShopifyError> {
        let response = request.send().await?;
        let status = response.status();

        // Extract the Link header before consuming the response body.
        let link_header = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let text = response.text().await?;
        // Error bodies are not always JSON (proxies return HTML); a null
        // body falls through to the fallback error message downstream.
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        Ok(ApiResponse {
            status,
            link_header,
            body,
        })
    }
}

/// Derive the URL origin for a shop domain.
///
/// A plain domain gets the `https://` scheme; a domain that already carries
/// a scheme is used verbatim, which lets tests point the client at a local
/// stand-in server.
fn shop_origin(shop_domain: &str) -> String {
    let trimmed = shop_domain.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shop_origin_defaults_to_https() {
        assert_eq!(
            shop_origin("test.myshopify.com"),
            "https://test.myshopify.com"
        );
    }

    #[test]
    fn test_shop_origin_preserves_explicit_scheme() {
        assert_eq!(shop_origin("http://127.0.0.1:4545"), "http://127.0.0.1:4545");
        assert_eq!(
            shop_origin("https://test.myshopify.com/"),
            "https://test.myshopify.com"
        );
    }

    #[test]
    fn test_client_base_url_includes_api_version() {
        let session = ShopSession::new("test.myshopify.com", "shpat_token").unwrap();
        let client = ShopifyClient::new(&session, "2026-01").unwrap();

        assert_eq!(
            client.endpoint("products.json").unwrap().as_str(),
            "https://test.myshopify.com/admin/api/2026-01/products.json"
        );
    }

    #[tokio::test]
    async fn test_execute_captures_status_link_and_body() {
        use wiremock::matchers::{header, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        let link = r#"<https://x/products.json?page_info=NEXT>; rel="next""#;
        Mock::given(method("GET"))
            .and(path("/admin/api/2026-01/products.json"))
            .and(header(ACCESS_TOKEN_HEADER, "shpat_token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Link", link)
                    .set_body_json(json!({"products": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let session = ShopSession::new(server.uri(), "shpat_token").unwrap();
        let client = ShopifyClient::new(&session, "2026-01").unwrap();

        let response = client.list_products(&[]).await.unwrap();

        assert!(response.is_ok());
        assert_eq!(response.link_header.as_deref(), Some(link));
        assert_eq!(response.body["products"], json!([]));
    }

    #[test]
    fn test_non_2xx_response_formats_upstream_errors() {
        let response = ApiResponse {
            status: StatusCode::NOT_FOUND,
            link_header: None,
            body: json!({"errors": "Not Found"}),
        };

        let err = response.into_error();
        assert!(matches!(
            err,
            ShopifyError::Api {
                status: 404,
                ref message
            } if message == "Not Found"
        ));
    }

    #[test]
    fn test_non_json_error_body_yields_fallback_message() {
        let response = ApiResponse {
            status: StatusCode::BAD_GATEWAY,
            link_header: None,
            body: Value::Null,
        };

        let err = response.into_error();
        assert!(matches!(
            err,
            ShopifyError::Api { status: 502, ref message }
                if message == super::super::FALLBACK_ERROR_MESSAGE
        ));
    }
}
