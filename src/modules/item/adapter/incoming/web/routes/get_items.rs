use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse, item::application::domain::entities::Item,
    shared::api::ApiResponse, AppState,
};

/// List items
///
/// Returns every item that has not been deleted, in insertion order.
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "All active items", body = Vec<Item>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/items")]
pub async fn get_items_handler(data: web::Data<AppState>) -> impl Responder {
    match data.item.list.execute().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => {
            error!(error = %e, "Failed to list items");
            ApiResponse::internal_error()
        }
    }
}
