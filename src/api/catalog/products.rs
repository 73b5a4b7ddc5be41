//! Product management for admins and vendors.

use crate::api::client::{segment, ApiClient};
use crate::api::envelope::ApiResponse;
use crate::api::transport::{HttpMethod, RequestBody, Transport};
use crate::api::types::ProductForm;

pub async fn list_products<T: Transport>(client: &ApiClient<T>) -> ApiResponse {
    client.authenticated_get("/product/get-products").await
}

/// Products owned by one vendor. GET /product/vendor/{vendorId}
pub async fn list_vendor_products<T: Transport>(
    client: &ApiClient<T>,
    vendor_id: &str,
) -> ApiResponse {
    client
        .authenticated_get(&format!("/product/vendor/{}", segment(vendor_id)))
        .await
}

pub async fn get_product<T: Transport>(client: &ApiClient<T>, id: &str) -> ApiResponse {
    client
        .authenticated_get(&format!("/product/{}", segment(id)))
        .await
}

/// POST /product/create as multipart so product images travel with the fields.
pub async fn create_product<T: Transport>(
    client: &ApiClient<T>,
    product: ProductForm,
) -> ApiResponse {
    client
        .authenticated(
            HttpMethod::Post,
            "/product/create",
            RequestBody::Multipart(product.into_form()),
        )
        .await
}

/// PUT /product/update/{id} (multipart).
pub async fn update_product<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    product: ProductForm,
) -> ApiResponse {
    client
        .authenticated(
            HttpMethod::Put,
            &format!("/product/update/{}", segment(id)),
            RequestBody::Multipart(product.into_form()),
        )
        .await
}

pub async fn delete_product<T: Transport>(client: &ApiClient<T>, id: &str) -> ApiResponse {
    client
        .authenticated_delete(&format!("/product/delete/{}", segment(id)))
        .await
}
