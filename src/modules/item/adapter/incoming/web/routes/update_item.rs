use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    item::application::{
        domain::entities::Item, ports::incoming::use_cases::UpdateItemError,
        ports::outgoing::UpdateItemData,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Fields left out keep their stored value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    #[schema(example = "Blue pen")]
    pub name: Option<String>,
    #[schema(example = 1.75)]
    pub price: Option<f64>,
}

/// Update item
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Merged item", body = Item),
        (status = 400, description = "Malformed body or id", body = ErrorResponse),
        (status = 404, description = "Item missing or deleted", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/items/{id}")]
pub async fn update_item_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
    payload: web::Json<UpdateItemRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let payload = payload.into_inner();
    let changes = UpdateItemData {
        name: payload.name,
        price: payload.price,
    };

    match data.item.update.execute(id, changes).await {
        Ok(item) => {
            info!(item_id = item.id, "Item updated");
            ApiResponse::success(item)
        }
        Err(UpdateItemError::NotFound) => {
            ApiResponse::not_found("ITEM_NOT_FOUND", "Item not found")
        }
        Err(e) => {
            error!(item_id = id, error = %e, "Failed to update item");
            ApiResponse::internal_error()
        }
    }
}
