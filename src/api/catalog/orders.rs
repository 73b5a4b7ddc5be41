//! Order listing and status updates.

use crate::api::client::{segment, ApiClient};
use crate::api::envelope::ApiResponse;
use crate::api::transport::{HttpMethod, Transport};
use crate::api::types::{OrderStatus, OrderStatusUpdate};

pub async fn list_orders<T: Transport>(client: &ApiClient<T>) -> ApiResponse {
    client.authenticated_get("/order/get-orders").await
}

pub async fn list_vendor_orders<T: Transport>(
    client: &ApiClient<T>,
    vendor_id: &str,
) -> ApiResponse {
    client
        .authenticated_get(&format!("/order/vendor/{}", segment(vendor_id)))
        .await
}

pub async fn get_order<T: Transport>(client: &ApiClient<T>, id: &str) -> ApiResponse {
    client
        .authenticated_get(&format!("/order/{}", segment(id)))
        .await
}

/// PATCH /order/update-status/{id} with `{ status }`.
pub async fn update_order_status<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    status: OrderStatus,
) -> ApiResponse {
    client
        .authenticated_json(
            HttpMethod::Patch,
            &format!("/order/update-status/{}", segment(id)),
            &OrderStatusUpdate { status },
        )
        .await
}
