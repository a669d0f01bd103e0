pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::item;
pub use modules::user;

use crate::config::AppConfig;
use crate::item::adapter::outgoing::{ItemQuerySeaOrm, ItemRepositorySeaOrm};
use crate::item::application::item_use_cases::ItemUseCases;
use crate::item::application::services::{
    CreateItemService, DeleteItemService, GetItemService, GetItemsService, UpdateItemService,
};
use crate::shared::api::{cors_policy, custom_json_config, custom_path_config, route_not_found};
use crate::shared::db::{connect, PoolSettings};
use crate::user::adapter::outgoing::security::Argon2Hasher;
use crate::user::adapter::outgoing::{UserQuerySeaOrm, UserRepositorySeaOrm};
use crate::user::application::services::{
    CreateUserService, DeleteUserService, GetUserService, GetUsersService, LoginUserService,
    UpdateUserService,
};
use crate::user::application::user_use_cases::UserUseCases;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub item: ItemUseCases,
    pub user: UserUseCases,
}

/// Wires every repository and service onto one shared connection.
pub fn build_app_state(db: Arc<DatabaseConnection>, hasher: Argon2Hasher) -> AppState {
    let item_query = ItemQuerySeaOrm::new(Arc::clone(&db));
    let item_repo = ItemRepositorySeaOrm::new(Arc::clone(&db));

    let user_query = UserQuerySeaOrm::new(Arc::clone(&db));
    let user_repo = UserRepositorySeaOrm::new(Arc::clone(&db));
    let hasher = Arc::new(hasher);

    AppState {
        item: ItemUseCases {
            list: Arc::new(GetItemsService::new(item_query.clone())),
            get: Arc::new(GetItemService::new(item_query)),
            create: Arc::new(CreateItemService::new(item_repo.clone())),
            update: Arc::new(UpdateItemService::new(item_repo.clone())),
            delete: Arc::new(DeleteItemService::new(item_repo)),
        },
        user: UserUseCases {
            list: Arc::new(GetUsersService::new(user_query.clone())),
            get: Arc::new(GetUserService::new(user_query.clone())),
            create: Arc::new(CreateUserService::new(user_repo.clone(), hasher.clone())),
            update: Arc::new(UpdateUserService::new(user_repo.clone(), hasher.clone())),
            delete: Arc::new(DeleteUserService::new(user_repo)),
            login: Arc::new(LoginUserService::new(user_query, hasher)),
        },
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("failed to load configuration")?;

    info!(
        engine = %config.database.engine,
        host = %config.database.host,
        database = %config.database.name,
        "Connecting to database"
    );
    let conn = connect(&config.database, &PoolSettings::default())
        .await
        .context("failed to connect database")?;

    Migrator::up(&conn, None)
        .await
        .context("failed to migrate database")?;
    info!("Database schema is up to date");

    let db_arc = Arc::new(conn);
    let hasher = Argon2Hasher::new(&config.hasher).context("invalid password hasher settings")?;
    let state = build_app_state(Arc::clone(&db_arc), hasher);

    let cors = config.cors.clone();
    let server_url = config.server.bind_address();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors_policy(&cors))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .default_service(web::to(route_not_found))
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(custom_json_config());
    cfg.app_data(custom_path_config());
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Items
    cfg.service(crate::item::adapter::incoming::web::routes::get_items_handler);
    cfg.service(crate::item::adapter::incoming::web::routes::create_item_handler);
    cfg.service(crate::item::adapter::incoming::web::routes::get_item_handler);
    cfg.service(crate::item::adapter::incoming::web::routes::update_item_handler);
    cfg.service(crate::item::adapter::incoming::web::routes::delete_item_handler);
    // Users (login before the {email} routes)
    cfg.service(crate::user::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::delete_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!(error = ?e, "Application terminated");
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
