//! Storefront carousel banners.

use crate::api::client::{segment, ApiClient};
use crate::api::envelope::ApiResponse;
use crate::api::transport::{HttpMethod, RequestBody, Transport};
use crate::api::types::CarouselForm;

pub async fn list_carousel<T: Transport>(client: &ApiClient<T>) -> ApiResponse {
    client.authenticated_get("/carousel/get-carousel").await
}

pub async fn create_carousel<T: Transport>(
    client: &ApiClient<T>,
    banner: CarouselForm,
) -> ApiResponse {
    client
        .authenticated(
            HttpMethod::Post,
            "/carousel/create",
            RequestBody::Multipart(banner.into_form()),
        )
        .await
}

pub async fn update_carousel<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    banner: CarouselForm,
) -> ApiResponse {
    client
        .authenticated(
            HttpMethod::Put,
            &format!("/carousel/update/{}", segment(id)),
            RequestBody::Multipart(banner.into_form()),
        )
        .await
}

pub async fn delete_carousel<T: Transport>(client: &ApiClient<T>, id: &str) -> ApiResponse {
    client
        .authenticated_delete(&format!("/carousel/delete/{}", segment(id)))
        .await
}
