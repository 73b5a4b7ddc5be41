//! Uniform result shape returned by every call in the access layer.
//!
//! Serialized as `{ success, data?, status?, error? }` with camelCase keys;
//! absent fields are omitted.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error message returned when an authenticated call finds no access token.
pub const NO_TOKEN: &str = "No token provided";

/// Status reported when a request failed without any HTTP response.
pub const TRANSPORT_FAILURE_STATUS: u16 = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl ApiResponse {
    pub fn ok(data: Value, status: u16) -> Self {
        Self {
            success: true,
            data: Some(data),
            status: Some(status),
            error: None,
        }
    }

    pub fn failure(error: impl Into<Value>, status: Option<u16>) -> Self {
        Self {
            success: false,
            data: None,
            status,
            error: Some(error.into()),
        }
    }

    /// The short-circuit result for an authenticated call without a token.
    pub fn missing_token() -> Self {
        Self::failure(NO_TOKEN, None)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Callers commonly treat 404 as "nothing there" rather than a hard error.
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    /// Deserialize `data` into a typed value.
    pub fn data_as<T: DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.data.as_ref().map(|d| T::deserialize(d))
    }

    /// Best-effort human readable error: the server's `message` field, a
    /// string error as-is, or the JSON rendering of anything else.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|err| match err {
            Value::String(s) => s.clone(),
            Value::Object(map) => map
                .get("message")
                .or_else(|| map.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string()),
            other => other.to_string(),
        })
    }
}
