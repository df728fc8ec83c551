//! HTTP adapter for the Kasira backend.
//!
//! One configured transport wraps `reqwest`: the base URL from config, JSON
//! in and out, and the bearer token attached per request by reading the
//! shared session. The adapter never stores a token of its own - the session
//! is the single source of truth and the header is derived on every call.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::session::SessionHandle;

/// Errors that can occur when calling the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body stream).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-supplied error message, or the raw body when it carried none.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// The server-supplied message, when the failure carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Error body shape the backend uses for rejections.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// The configured HTTP transport.
///
/// Cheaply cloneable; clones share the underlying connection pool and the
/// session view.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    session: SessionHandle,
}

impl ApiClient {
    /// Create the transport for the given base URL.
    ///
    /// The session handle is a read-only view here: the adapter derives the
    /// `Authorization` header from it on each request.
    #[must_use]
    pub fn new(base_url: &Url, session: SessionHandle) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.as_str().trim_end_matches('/').to_string(),
                session,
            }),
        }
    }

    /// GET a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unexpected body shape.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let request = self.authorize(self.inner.client.get(self.endpoint(path)));
        read_json(request.send().await?).await
    }

    /// POST a JSON payload, expecting a JSON body back.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let request = self.authorize(self.inner.client.post(self.endpoint(path)).json(body));
        read_json(request.send().await?).await
    }

    /// POST a JSON payload, ignoring whatever body comes back.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn post_ignore_body<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        debug!(path, "POST");
        let request = self.authorize(self.inner.client.post(self.endpoint(path)).json(body));
        ensure_success(request.send().await?).await?;
        Ok(())
    }

    /// PUT a JSON payload, expecting a JSON body back.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "PUT");
        let request = self.authorize(self.inner.client.put(self.endpoint(path)).json(body));
        read_json(request.send().await?).await
    }

    /// DELETE a resource. The backend answers with an empty body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "DELETE");
        let request = self.authorize(self.inner.client.delete(self.endpoint(path)));
        ensure_success(request.send().await?).await?;
        Ok(())
    }

    /// Join a literal path onto the base URL.
    ///
    /// Paths are concatenated verbatim, never normalized. Collection
    /// endpoints require their exact documented form - a stripped trailing
    /// slash triggers a server-side redirect that rewrites the method.
    fn endpoint(&self, path: &str) -> String {
        debug_assert!(path.starts_with('/'), "API paths are absolute");
        format!("{}{}", self.inner.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.inner.session.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Check the status, then parse the body as JSON.
///
/// The body is read as text first so a shape mismatch surfaces the parse
/// error rather than a generic decode failure.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body).map_or(body, |parsed| parsed.error);
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(
            &Url::parse(base).unwrap(),
            SessionHandle::default(),
        )
    }

    #[test]
    fn test_endpoint_preserves_trailing_slash() {
        let api = client("http://localhost:8000/api");
        assert_eq!(api.endpoint("/products/"), "http://localhost:8000/api/products/");
        assert_eq!(
            api.endpoint("/analytics/daily-sales"),
            "http://localhost:8000/api/analytics/daily-sales"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash_on_base() {
        // Url::parse keeps the trailing slash; the adapter must not double it.
        let api = client("http://localhost:8000/api/");
        assert_eq!(api.endpoint("/settings/"), "http://localhost:8000/api/settings/");
    }

    #[test]
    fn test_server_message_only_for_api_rejections() {
        let err = ApiError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.server_message(), Some("Invalid credentials"));

        let err = ApiError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.server_message(), None);
    }
}
