//! Request executor: one HTTP request in, one `ApiResponse` out.
//!
//! This is the only place where outcomes are normalized. It never touches
//! the session and never retries.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use super::envelope::{ApiResponse, TRANSPORT_FAILURE_STATUS};
use super::transport::{ApiRequest, HttpMethod, RawResponse, RequestBody, Transport};

/// Apply the content-type policy for a body.
///
/// JSON (and empty) bodies default to `application/json` unless the caller
/// set a content type. Multipart bodies never carry a caller content type:
/// the transport must write its own header with the form boundary.
pub fn prepare_headers(body: &RequestBody, mut headers: HeaderMap) -> HeaderMap {
    if body.is_multipart() {
        headers.remove(CONTENT_TYPE);
    } else if !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    headers
}

/// Turn a completed exchange into an envelope.
pub fn normalize(raw: RawResponse) -> ApiResponse {
    if raw.is_success() {
        return ApiResponse::ok(raw.body, raw.status);
    }
    let error = match raw.body {
        Value::Null => Value::String(format!("Request failed with status code {}", raw.status)),
        Value::String(ref s) if s.trim().is_empty() => {
            Value::String(format!("Request failed with status code {}", raw.status))
        }
        body => body,
    };
    ApiResponse::failure(error, Some(raw.status))
}

/// Perform exactly one request and normalize the outcome.
pub async fn execute<T: Transport>(
    transport: &T,
    method: HttpMethod,
    url: &str,
    body: RequestBody,
    headers: HeaderMap,
) -> ApiResponse {
    let headers = prepare_headers(&body, headers);
    let request = ApiRequest {
        method,
        url: url.to_string(),
        headers,
        body,
    };

    log::debug!("{} {}", method, url);
    match transport.send(request).await {
        Ok(raw) => {
            let resp = normalize(raw);
            if !resp.success {
                log::warn!(
                    "{} {} failed with status {}",
                    method,
                    url,
                    resp.status.unwrap_or_default()
                );
            }
            resp
        }
        Err(e) => {
            log::warn!("{} {} failed: {}", method, url, e);
            ApiResponse::failure(e.to_string(), Some(TRANSPORT_FAILURE_STATUS))
        }
    }
}
