//! Coupon CRUD. All payloads are JSON.

use crate::api::client::{segment, ApiClient};
use crate::api::envelope::ApiResponse;
use crate::api::transport::{HttpMethod, Transport};
use crate::api::types::CouponRequest;

pub async fn list_coupons<T: Transport>(client: &ApiClient<T>) -> ApiResponse {
    client.authenticated_get("/coupon/get-coupons").await
}

pub async fn create_coupon<T: Transport>(
    client: &ApiClient<T>,
    coupon: &CouponRequest,
) -> ApiResponse {
    client
        .authenticated_json(HttpMethod::Post, "/coupon/create", coupon)
        .await
}

pub async fn update_coupon<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    coupon: &CouponRequest,
) -> ApiResponse {
    client
        .authenticated_json(
            HttpMethod::Put,
            &format!("/coupon/update/{}", segment(id)),
            coupon,
        )
        .await
}

pub async fn delete_coupon<T: Transport>(client: &ApiClient<T>, id: &str) -> ApiResponse {
    client
        .authenticated_delete(&format!("/coupon/delete/{}", segment(id)))
        .await
}
