use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    user::application::{
        domain::entities::User,
        ports::incoming::use_cases::{LoginCommand, LoginError},
    },
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// Check credentials
///
/// Returns the user record when the password matches. No token or session
/// is created.
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials match", body = User),
        (status = 400, description = "Malformed body or blank fields", body = ErrorResponse),
        (status = 401, description = "Unknown email or wrong password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/users/login")]
pub async fn login_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let command = LoginCommand {
        email: payload.email,
        password: payload.password,
    };

    match data.user.login.execute(command).await {
        Ok(user) => {
            info!(user_id = user.id, "User logged in");
            ApiResponse::success(user)
        }
        Err(LoginError::InvalidInput(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(LoginError::InvalidCredentials) => {
            warn!("Login rejected");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
