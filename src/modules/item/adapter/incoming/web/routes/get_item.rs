use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    item::application::{
        domain::entities::Item, ports::incoming::use_cases::GetItemError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Get item by id
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Active item", body = Item),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Item missing or deleted", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/items/{id}")]
pub async fn get_item_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();

    match data.item.get.execute(id).await {
        Ok(item) => ApiResponse::success(item),
        Err(GetItemError::NotFound) => ApiResponse::not_found("ITEM_NOT_FOUND", "Item not found"),
        Err(e) => {
            error!(item_id = id, error = %e, "Failed to fetch item");
            ApiResponse::internal_error()
        }
    }
}
