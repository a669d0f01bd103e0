use crate::api::schemas::{DeletedResponse, ErrorResponse, NotFoundResponse};
use utoipa::OpenApi;

use crate::item::adapter::incoming::web::routes::{CreateItemRequest, UpdateItemRequest};
use crate::item::application::domain::entities::Item;
use crate::user::adapter::incoming::web::routes::{
    CreateUserRequest, LoginRequest, UpdateUserRequest,
};
use crate::user::application::domain::entities::User;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "CRUD over inventory items and users, with a credential check"
    ),
    paths(
        // Item endpoints
        crate::item::adapter::incoming::web::routes::get_items_handler,
        crate::item::adapter::incoming::web::routes::create_item_handler,
        crate::item::adapter::incoming::web::routes::get_item_handler,
        crate::item::adapter::incoming::web::routes::update_item_handler,
        crate::item::adapter::incoming::web::routes::delete_item_handler,

        // User endpoints
        crate::user::adapter::incoming::web::routes::get_users_handler,
        crate::user::adapter::incoming::web::routes::create_user_handler,
        crate::user::adapter::incoming::web::routes::login_user_handler,
        crate::user::adapter::incoming::web::routes::get_user_handler,
        crate::user::adapter::incoming::web::routes::update_user_handler,
        crate::user::adapter::incoming::web::routes::delete_user_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            NotFoundResponse,
            DeletedResponse,

            // Items
            Item,
            CreateItemRequest,
            UpdateItemRequest,

            // Users
            User,
            CreateUserRequest,
            UpdateUserRequest,
            LoginRequest,
        )
    ),
    tags(
        (name = "items", description = "Inventory item management"),
        (name = "users", description = "User management and login"),
    )
)]
pub struct ApiDoc;
