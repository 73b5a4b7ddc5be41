//! Login, vendor registration, token refresh and logout.
//!
//! Login and registration are public routes (no bearer header). Token
//! refresh is manual: nothing in the client calls it on a 401, callers
//! decide when to refresh.

use base64::Engine;
use serde::Serialize;
use serde_json::Value;

use super::client::ApiClient;
use super::envelope::ApiResponse;
use super::transport::{HttpMethod, RequestBody, Transport};
use super::types::{LoginRequest, RefreshRequest, VendorRegistration};
use crate::session::{Credentials, StoreError};

pub const NO_REFRESH_TOKEN: &str = "No refresh token available";
pub const INVALID_REFRESH_TOKEN: &str = "Invalid refresh token";
pub const REFRESH_FAILED: &str = "Failed to refresh token";

/// Result of a token refresh: `{ success, accessToken? , error? }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RefreshOutcome {
    fn refreshed(access_token: String) -> Self {
        Self {
            success: true,
            access_token: Some(access_token),
            error: None,
        }
    }

    fn failed(error: &str) -> Self {
        Self {
            success: false,
            access_token: None,
            error: Some(error.to_string()),
        }
    }
}

/// Log in as the client session's role and persist the returned credentials.
///
/// POST /{role}/login. On success every credential of the role is replaced.
/// The envelope is returned unchanged either way.
pub async fn login<T: Transport>(client: &ApiClient<T>, request: &LoginRequest) -> ApiResponse {
    let role = client.session().role();
    let path = format!("/{}/login", role.prefix());
    let body = match RequestBody::json(request) {
        Ok(body) => body,
        Err(e) => {
            return ApiResponse::failure(format!("Failed to encode request body: {}", e), None)
        }
    };

    let resp = client.public(HttpMethod::Post, &path, body).await;
    if !resp.success {
        return resp;
    }

    match resp.data.as_ref().and_then(credentials_from_login) {
        Some(credentials) => match client.session().store_login(&credentials) {
            Ok(()) => log::info!("Logged in as {}", role),
            Err(e) => log::warn!("Login succeeded but credentials were not stored: {}", e),
        },
        None => log::warn!("Login response for {} carried no access token", role),
    }
    resp
}

/// Register a new vendor account. POST /vendor/register (multipart).
pub async fn register_vendor<T: Transport>(
    client: &ApiClient<T>,
    registration: VendorRegistration,
) -> ApiResponse {
    client
        .public(
            HttpMethod::Post,
            "/vendor/register",
            RequestBody::Multipart(registration.into_form()),
        )
        .await
}

/// Exchange the stored refresh token for a new access token.
///
/// POST /auth/refresh-token with `{ refreshToken }`. On success only the
/// access token is overwritten; a response without a usable `accessToken`
/// leaves the store untouched.
pub async fn refresh_access_token<T: Transport>(client: &ApiClient<T>) -> RefreshOutcome {
    let session = client.session();
    let Some(refresh_token) = session.refresh_token() else {
        return RefreshOutcome::failed(NO_REFRESH_TOKEN);
    };

    let body = match RequestBody::json(&RefreshRequest { refresh_token }) {
        Ok(body) => body,
        Err(_) => return RefreshOutcome::failed(REFRESH_FAILED),
    };
    let resp = client
        .public(HttpMethod::Post, "/auth/refresh-token", body)
        .await;
    if !resp.success {
        log::warn!(
            "Token refresh failed: {}",
            resp.error_message().unwrap_or_default()
        );
        return RefreshOutcome::failed(REFRESH_FAILED);
    }

    let access_token = resp
        .data
        .as_ref()
        .and_then(|data| string_field(data, "accessToken"));
    let Some(access_token) = access_token else {
        return RefreshOutcome::failed(INVALID_REFRESH_TOKEN);
    };

    if let Err(e) = session.set_access_token(&access_token) {
        log::warn!("Failed to persist refreshed access token: {}", e);
        return RefreshOutcome::failed(REFRESH_FAILED);
    }
    log::info!("Access token refreshed for {}", session.role());
    RefreshOutcome::refreshed(access_token)
}

/// Forget every stored credential of the session's role. Local only.
pub fn logout<T: Transport>(client: &ApiClient<T>) -> Result<(), StoreError> {
    client.session().clear()?;
    log::info!("Logged out {}", client.session().role());
    Ok(())
}

/// Pull credentials out of a login response body.
///
/// The role id comes from the body when present, otherwise from the access
/// token's JWT payload.
fn credentials_from_login(data: &Value) -> Option<Credentials> {
    let access_token = string_field(data, "accessToken").or_else(|| string_field(data, "token"))?;

    let user = ["user", "admin", "vendor"]
        .iter()
        .find_map(|key| data.get(*key).filter(|v| v.is_object()));

    let role = string_field(data, "role").or_else(|| user.and_then(|u| string_field(u, "role")));

    let role_id = ["roleId", "id", "_id"]
        .iter()
        .find_map(|key| id_field(data, key))
        .or_else(|| user.and_then(|u| id_field(u, "_id").or_else(|| id_field(u, "id"))))
        .or_else(|| id_from_jwt(&access_token));

    Some(Credentials {
        access_token,
        refresh_token: string_field(data, "refreshToken"),
        role,
        role_id,
    })
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Ids may be strings or numbers.
fn id_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read `id`, `_id` or `sub` from a JWT payload without verifying it.
fn id_from_jwt(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let decoded = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: Value = serde_json::from_slice(&decoded).ok()?;
    ["id", "_id", "sub"]
        .iter()
        .find_map(|key| id_field(&claims, key))
}
