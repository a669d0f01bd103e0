use actix_web::{delete, web, Responder};
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::{
    api::schemas::{DeletedResponse, ErrorResponse},
    shared::api::ApiResponse,
    AppState,
};

/// `{"id<id>": "is deleted"}`
pub(crate) fn deleted_body(id: i32) -> Value {
    let mut body = Map::new();
    body.insert(format!("id{id}"), Value::String("is deleted".to_string()));
    Value::Object(body)
}

/// Soft delete item
///
/// Marks the item deleted. Unknown or already deleted ids still succeed.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Deletion confirmation", body = DeletedResponse),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/items/{id}")]
pub async fn delete_item_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.item.delete.execute(id).await {
        Ok(()) => {
            info!(item_id = id, "Item soft deleted");
            ApiResponse::success(deleted_body(id))
        }
        Err(e) => {
            error!(item_id = id, error = %e, "Failed to delete item");
            ApiResponse::internal_error()
        }
    }
}
