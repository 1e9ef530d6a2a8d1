//! Transport seam and the shared request helpers.

use std::future::Future;
use std::sync::Arc;

use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};
use url::Url;

use super::ApiError;

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Fully built URL, query included.
    pub url: Url,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

/// A raw response: status plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Body text; may be empty.
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends requests to the backend.
///
/// The production implementation is [`ReqwestTransport`]; tests plug in a
/// scripted transport instead.
pub trait Transport: Send + Sync {
    /// Send one request and return the raw response.
    ///
    /// Only transport failures are errors here; a non-2xx status is still an
    /// `Ok` response.
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>> + Send;
}

impl<U: Transport> Transport for Arc<U> {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>> + Send {
        (**self).send(request)
    }
}

/// [`Transport`] backed by `reqwest`.
///
/// No authentication header and no timeout are configured: a hung request
/// stays pending until the connection gives up.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a new transport.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new() -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = self.client.request(request.method, request.url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}

/// Client for the pizzeria backend.
///
/// Cheap to clone; clones share the transport. Resource operations are
/// implemented in the `menu_items`, `orders` and `customers` modules.
pub struct ApiClient<T> {
    inner: Arc<ApiClientInner<T>>,
}

struct ApiClientInner<T> {
    transport: T,
    base_url: Url,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client rooted at `base_url` (e.g. `https://host/api`).
    #[must_use]
    pub fn new(transport: T, base_url: &Url) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                transport,
                base_url: base_url.clone(),
            }),
        }
    }

    /// The backend API root.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Build a URL from path segments and query pairs.
    ///
    /// Segments are percent-encoded, so user input such as a pizza name can
    /// be passed through unchanged.
    pub(crate) fn url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// GET a JSON body; an empty or `null` body yields `None`.
    pub(crate) async fn get_optional<R: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<Option<R>, ApiError> {
        let body = self.execute(Method::GET, url, None).await?;
        decode_optional(&body)
    }

    /// GET a JSON array; an empty or `null` body yields an empty list.
    pub(crate) async fn get_list<R: DeserializeOwned>(&self, url: Url) -> Result<Vec<R>, ApiError> {
        Ok(self.get_optional(url).await?.unwrap_or_default())
    }

    /// POST a JSON body and decode the (optional) JSON response.
    pub(crate) async fn post<R: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<Option<R>, ApiError> {
        let body = self.execute(Method::POST, url, Some(encode(body)?)).await?;
        decode_optional(&body)
    }

    /// PUT a JSON body and decode the (optional) JSON response.
    pub(crate) async fn put<R: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<Option<R>, ApiError> {
        let body = self.execute(Method::PUT, url, Some(encode(body)?)).await?;
        decode_optional(&body)
    }

    /// DELETE and return the response body as plain text.
    pub(crate) async fn delete_text(&self, url: Url) -> Result<String, ApiError> {
        self.execute(Method::DELETE, url, None).await
    }

    /// Send a request and return the body of a 2xx response.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<String, ApiError> {
        let request = ApiRequest {
            method: method.clone(),
            url: url.clone(),
            body,
        };

        let response = self
            .inner
            .transport
            .send(request)
            .await
            .inspect_err(|e| warn!(%method, %url, error = %e, "Backend request failed"))?;

        if !response.is_success() {
            warn!(%method, %url, status = response.status, "Backend returned an error status");
            return Err(ApiError::Server {
                status: response.status,
            });
        }

        debug!(%method, %url, status = response.status, "Backend request succeeded");
        Ok(response.body)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode_optional<R: DeserializeOwned>(body: &str) -> Result<Option<R>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<R>>(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::testing::{BASE_URL, MockTransport, client};

    #[test]
    fn test_response_success_range() {
        let ok = ApiResponse {
            status: 204,
            body: String::new(),
        };
        let err = ApiResponse {
            status: 404,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!err.is_success());
    }

    #[test]
    fn test_url_encodes_segments_and_query() {
        let (_, api) = client();
        let url = api
            .url(&["pizzas", "name", "Quattro Formaggi"], &[("page", "0".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            format!("{BASE_URL}/pizzas/name/Quattro%20Formaggi?page=0")
        );
    }

    #[test]
    fn test_url_without_query_has_no_question_mark() {
        let (_, api) = client();
        let url = api.url(&["orders"], &[]).unwrap();
        assert_eq!(url.as_str(), format!("{BASE_URL}/orders"));
    }

    #[test]
    fn test_url_with_trailing_slash_base() {
        let base = Url::parse("http://localhost:8080/api/").unwrap();
        let api = ApiClient::new(Arc::new(MockTransport::new()), &base);
        let url = api.url(&["customers"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/customers");
    }

    #[test]
    fn test_decode_optional_empty_and_null() {
        assert_eq!(decode_optional::<u8>("").unwrap(), None);
        assert_eq!(decode_optional::<u8>("null").unwrap(), None);
        assert_eq!(decode_optional::<u8>("7").unwrap(), Some(7));
        assert!(matches!(
            decode_optional::<u8>("{"),
            Err(ApiError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_server_error_discards_body() {
        let (mock, api) = client();
        mock.respond_text(500, "{\"message\":\"boom\"}");

        let url = api.url(&["orders"], &[]).unwrap();
        let result = api.get_list::<serde_json::Value>(url).await;
        assert_eq!(result, Err(ApiError::Server { status: 500 }));
    }

    #[tokio::test]
    async fn test_network_error_passes_through() {
        let (mock, api) = client();
        mock.fail_network("connection refused");

        let url = api.url(&["orders"], &[]).unwrap();
        let result = api.delete_text(url).await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
