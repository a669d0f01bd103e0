use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    user::application::{domain::entities::User, ports::incoming::use_cases::GetUserError},
    AppState,
};

/// Get user by email
#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = "users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "Active user", body = User),
        (status = 404, description = "User missing or deleted", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/users/{email}")]
pub async fn get_user_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let email = path.into_inner();

    match data.user.get.execute(&email).await {
        Ok(user) => ApiResponse::success(user),
        Err(GetUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        Err(e) => {
            error!(error = %e, "Failed to fetch user");
            ApiResponse::internal_error()
        }
    }
}
