use actix_web::{delete, web, Responder};
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::{
    api::schemas::{DeletedResponse, ErrorResponse},
    shared::api::ApiResponse,
    AppState,
};

/// `{"<email>": "is deleted"}`, keyed by the email exactly as requested.
pub(crate) fn deleted_body(email: &str) -> Value {
    let mut body = Map::new();
    body.insert(email.to_string(), Value::String("is deleted".to_string()));
    Value::Object(body)
}

/// Soft delete user
#[utoipa::path(
    delete,
    path = "/users/{email}",
    tag = "users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "Deletion confirmation", body = DeletedResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/users/{email}")]
pub async fn delete_user_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let email = path.into_inner();

    match data.user.delete.execute(&email).await {
        Ok(()) => {
            info!("User soft deleted");
            ApiResponse::success(deleted_body(&email))
        }
        Err(e) => {
            error!(error = %e, "Failed to delete user");
            ApiResponse::internal_error()
        }
    }
}
