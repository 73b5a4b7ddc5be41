//! API client: base URL, injected session and transport.
//!
//! Holds the conventions every endpoint function shares: URL building,
//! reading the access token at call time, the `Authorization: Bearer` header,
//! and delegation to the request executor.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use super::envelope::ApiResponse;
use super::executor;
use super::transport::{HttpMethod, HttpTransport, RequestBody, Transport};
use crate::config::ApiConfig;
use crate::session::Session;

/// HTTP client wrapper for the marketplace API.
pub struct ApiClient<T: Transport = HttpTransport> {
    transport: T,
    base_url: String,
    session: Session,
}

impl ApiClient<HttpTransport> {
    /// Create a client for the configured base URL using the reqwest transport.
    pub fn new(config: &ApiConfig, session: Session) -> Self {
        Self::with_transport(&config.base_url, session, HttpTransport::new(config))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base_url: &str, session: Session, transport: T) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for a path relative to the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send an unauthenticated request (login, registration, token refresh).
    pub async fn public(&self, method: HttpMethod, path: &str, body: RequestBody) -> ApiResponse {
        executor::execute(
            &self.transport,
            method,
            &self.url(path),
            body,
            HeaderMap::new(),
        )
        .await
    }

    /// Send an authenticated request.
    ///
    /// Short-circuits with "No token provided" (and no network call) when the
    /// session holds no access token.
    pub async fn authenticated(
        &self,
        method: HttpMethod,
        path: &str,
        body: RequestBody,
    ) -> ApiResponse {
        match self.bearer_headers(method, path) {
            Ok(headers) => {
                executor::execute(&self.transport, method, &self.url(path), body, headers).await
            }
            Err(resp) => resp,
        }
    }

    /// `Authorization: Bearer <token>` from the token stored right now.
    fn bearer_headers(&self, method: HttpMethod, path: &str) -> Result<HeaderMap, ApiResponse> {
        let Some(token) = self.session.access_token() else {
            log::debug!("{} {}: no access token, request not sent", method, path);
            return Err(ApiResponse::missing_token());
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            log::warn!("Stored access token is not a valid header value");
            ApiResponse::failure("Invalid access token", Some(400))
        })?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    pub async fn authenticated_get(&self, path: &str) -> ApiResponse {
        self.authenticated(HttpMethod::Get, path, RequestBody::Empty)
            .await
    }

    /// Authenticated GET with query parameters; `None` values are left out.
    pub async fn authenticated_get_with_query(
        &self,
        path: &str,
        query: &[(&str, Option<String>)],
    ) -> ApiResponse {
        self.authenticated_get(&with_query(path, query)).await
    }

    pub async fn authenticated_delete(&self, path: &str) -> ApiResponse {
        self.authenticated(HttpMethod::Delete, path, RequestBody::Empty)
            .await
    }

    /// Authenticated request with a serializable JSON body.
    pub async fn authenticated_json<P: serde::Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &P,
    ) -> ApiResponse {
        let headers = match self.bearer_headers(method, path) {
            Ok(headers) => headers,
            Err(resp) => return resp,
        };
        match RequestBody::json(payload) {
            Ok(body) => {
                executor::execute(&self.transport, method, &self.url(path), body, headers).await
            }
            Err(e) => ApiResponse::failure(format!("Failed to encode request body: {}", e), None),
        }
    }
}

/// Append URL-encoded query parameters to a path.
pub fn with_query(path: &str, query: &[(&str, Option<String>)]) -> String {
    let pairs: Vec<String> = query
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{}={}", urlencoding::encode(key), urlencoding::encode(v)))
        })
        .collect();
    if pairs.is_empty() {
        return path.to_string();
    }
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", path, separator, pairs.join("&"))
}

/// Encode a path segment such as an entity id.
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
