use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    user::application::{
        domain::entities::User,
        ports::incoming::use_cases::{CreateUserCommand, CreateUserError},
    },
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// Create user
///
/// Stores the email (trimmed, lowercased) and an Argon2id hash of the password.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 400, description = "Malformed body or blank fields", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/users")]
pub async fn create_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let command = CreateUserCommand {
        email: payload.email,
        password: payload.password,
    };

    match data.user.create.execute(command).await {
        Ok(user) => {
            info!(user_id = user.id, "User created");
            ApiResponse::success(user)
        }
        Err(CreateUserError::InvalidInput(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(CreateUserError::AlreadyExists) => {
            warn!("Rejected duplicate user email");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists")
        }
        Err(e) => {
            error!(error = %e, "Failed to create user");
            ApiResponse::internal_error()
        }
    }
}
