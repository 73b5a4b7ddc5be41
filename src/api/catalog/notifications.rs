//! Broadcast notifications.

use crate::api::client::{segment, ApiClient};
use crate::api::envelope::ApiResponse;
use crate::api::transport::{HttpMethod, RequestBody, Transport};
use crate::api::types::NotificationForm;

pub async fn list_notifications<T: Transport>(client: &ApiClient<T>) -> ApiResponse {
    client
        .authenticated_get("/notification/get-notifications")
        .await
}

/// POST /notification/create. Always multipart, the route expects form data
/// even when no image is attached.
pub async fn create_notification<T: Transport>(
    client: &ApiClient<T>,
    notification: NotificationForm,
) -> ApiResponse {
    client
        .authenticated(
            HttpMethod::Post,
            "/notification/create",
            RequestBody::Multipart(notification.into_form()),
        )
        .await
}

pub async fn mark_notification_read<T: Transport>(client: &ApiClient<T>, id: &str) -> ApiResponse {
    client
        .authenticated(
            HttpMethod::Patch,
            &format!("/notification/read/{}", segment(id)),
            RequestBody::Empty,
        )
        .await
}

pub async fn delete_notification<T: Transport>(client: &ApiClient<T>, id: &str) -> ApiResponse {
    client
        .authenticated_delete(&format!("/notification/delete/{}", segment(id)))
        .await
}
