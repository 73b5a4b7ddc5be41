//! Product review moderation.

use crate::api::client::{segment, ApiClient};
use crate::api::envelope::ApiResponse;
use crate::api::transport::{HttpMethod, Transport};
use crate::api::types::ReviewReply;

pub async fn list_reviews<T: Transport>(client: &ApiClient<T>) -> ApiResponse {
    client.authenticated_get("/review/get-reviews").await
}

pub async fn list_product_reviews<T: Transport>(
    client: &ApiClient<T>,
    product_id: &str,
) -> ApiResponse {
    client
        .authenticated_get(&format!("/review/product/{}", segment(product_id)))
        .await
}

pub async fn reply_to_review<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    reply: &str,
) -> ApiResponse {
    client
        .authenticated_json(
            HttpMethod::Post,
            &format!("/review/reply/{}", segment(id)),
            &ReviewReply {
                reply: reply.to_string(),
            },
        )
        .await
}

pub async fn delete_review<T: Transport>(client: &ApiClient<T>, id: &str) -> ApiResponse {
    client
        .authenticated_delete(&format!("/review/delete/{}", segment(id)))
        .await
}
