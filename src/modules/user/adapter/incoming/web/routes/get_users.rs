use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse, shared::api::ApiResponse,
    user::application::domain::entities::User, AppState,
};

/// List users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All active users", body = Vec<User>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/users")]
pub async fn get_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.user.list.execute().await {
        Ok(users) => ApiResponse::success(users),
        Err(e) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}
