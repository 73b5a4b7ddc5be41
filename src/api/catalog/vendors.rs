//! Vendor (seller) accounts as seen by an admin.

use crate::api::client::{segment, ApiClient};
use crate::api::envelope::ApiResponse;
use crate::api::transport::{HttpMethod, RequestBody, Transport};
use crate::api::types::{VendorForm, VendorStatus, VendorStatusUpdate};

pub async fn list_vendors<T: Transport>(client: &ApiClient<T>) -> ApiResponse {
    client.authenticated_get("/vendor/get-vendors").await
}

pub async fn get_vendor<T: Transport>(client: &ApiClient<T>, id: &str) -> ApiResponse {
    client
        .authenticated_get(&format!("/vendor/{}", segment(id)))
        .await
}

/// POST /vendor/create (multipart, optional logo).
pub async fn create_vendor<T: Transport>(client: &ApiClient<T>, vendor: VendorForm) -> ApiResponse {
    client
        .authenticated(
            HttpMethod::Post,
            "/vendor/create",
            RequestBody::Multipart(vendor.into_form()),
        )
        .await
}

pub async fn update_vendor<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    vendor: VendorForm,
) -> ApiResponse {
    client
        .authenticated(
            HttpMethod::Put,
            &format!("/vendor/update/{}", segment(id)),
            RequestBody::Multipart(vendor.into_form()),
        )
        .await
}

/// Approve, reject or block a vendor. PATCH /vendor/update-status/{id}
pub async fn update_vendor_status<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    status: VendorStatus,
) -> ApiResponse {
    client
        .authenticated_json(
            HttpMethod::Patch,
            &format!("/vendor/update-status/{}", segment(id)),
            &VendorStatusUpdate { status },
        )
        .await
}

pub async fn delete_vendor<T: Transport>(client: &ApiClient<T>, id: &str) -> ApiResponse {
    client
        .authenticated_delete(&format!("/vendor/delete/{}", segment(id)))
        .await
}
