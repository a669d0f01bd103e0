use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    item::application::{domain::entities::Item, ports::outgoing::CreateItemData},
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Client supplied `id` and timestamps are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    #[schema(example = "Mechanical pencil")]
    pub name: String,
    #[schema(example = 2.5)]
    pub price: f64,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create item
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Persisted item with its assigned id", body = Item),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/items")]
pub async fn create_item_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateItemRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let input = CreateItemData {
        name: payload.name,
        price: payload.price,
    };

    match data.item.create.execute(input).await {
        Ok(item) => {
            info!(item_id = item.id, "Item created");
            ApiResponse::success(item)
        }
        Err(e) => {
            error!(error = %e, "Failed to create item");
            ApiResponse::internal_error()
        }
    }
}
