use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    user::application::{
        domain::entities::User,
        ports::incoming::use_cases::{UpdateUserCommand, UpdateUserError},
    },
    AppState,
};

/// Fields left out keep their stored value. A new password is re-hashed.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "jane.doe@example.com")]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Update user
#[utoipa::path(
    put,
    path = "/users/{email}",
    tag = "users",
    params(("email" = String, Path, description = "Current user email")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Merged user", body = User),
        (status = 400, description = "Malformed body or blank fields", body = ErrorResponse),
        (status = 404, description = "User missing or deleted", body = ErrorResponse),
        (status = 409, description = "New email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/users/{email}")]
pub async fn update_user_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
    payload: web::Json<UpdateUserRequest>,
) -> impl Responder {
    let email = path.into_inner();
    let payload = payload.into_inner();
    let command = UpdateUserCommand {
        email: payload.email,
        password: payload.password,
    };

    match data.user.update.execute(&email, command).await {
        Ok(user) => {
            info!(user_id = user.id, "User updated");
            ApiResponse::success(user)
        }
        Err(UpdateUserError::InvalidInput(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(UpdateUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateUserError::AlreadyExists) => {
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists")
        }
        Err(e) => {
            error!(error = %e, "Failed to update user");
            ApiResponse::internal_error()
        }
    }
}
