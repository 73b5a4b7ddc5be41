//! Main and sub category management.

use crate::api::client::{segment, ApiClient};
use crate::api::envelope::ApiResponse;
use crate::api::transport::{HttpMethod, RequestBody, Transport};
use crate::api::types::{CategoryForm, SubCategoryRequest};

/// GET /category/get-categories
///
/// Returns `{ mainCategories: [...] }` with sub categories nested.
pub async fn list_categories<T: Transport>(client: &ApiClient<T>) -> ApiResponse {
    client.authenticated_get("/category/get-categories").await
}

pub async fn get_category<T: Transport>(client: &ApiClient<T>, id: &str) -> ApiResponse {
    client
        .authenticated_get(&format!("/category/{}", segment(id)))
        .await
}

/// POST /category/create-main-category (multipart, optional image).
pub async fn create_main_category<T: Transport>(
    client: &ApiClient<T>,
    category: CategoryForm,
) -> ApiResponse {
    client
        .authenticated(
            HttpMethod::Post,
            "/category/create-main-category",
            RequestBody::Multipart(category.into_form()),
        )
        .await
}

/// POST /category/create-sub-category (JSON).
pub async fn create_sub_category<T: Transport>(
    client: &ApiClient<T>,
    request: &SubCategoryRequest,
) -> ApiResponse {
    client
        .authenticated_json(HttpMethod::Post, "/category/create-sub-category", request)
        .await
}

/// PUT /category/update/{id} (multipart).
pub async fn update_category<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    category: CategoryForm,
) -> ApiResponse {
    client
        .authenticated(
            HttpMethod::Put,
            &format!("/category/update/{}", segment(id)),
            RequestBody::Multipart(category.into_form()),
        )
        .await
}

pub async fn delete_category<T: Transport>(client: &ApiClient<T>, id: &str) -> ApiResponse {
    client
        .authenticated_delete(&format!("/category/delete/{}", segment(id)))
        .await
}
