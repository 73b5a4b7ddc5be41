//! Read-only customer listing.

use crate::api::client::{segment, ApiClient};
use crate::api::envelope::ApiResponse;
use crate::api::transport::Transport;

pub async fn list_customers<T: Transport>(client: &ApiClient<T>) -> ApiResponse {
    client.authenticated_get("/customer/get-customers").await
}

pub async fn get_customer<T: Transport>(client: &ApiClient<T>, id: &str) -> ApiResponse {
    client
        .authenticated_get(&format!("/customer/{}", segment(id)))
        .await
}
