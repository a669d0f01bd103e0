use actix_web::web;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;

use crate::config::HasherSettings;
use crate::shared::db::{connect, DatabaseEngine, DatabaseSettings, PoolSettings};
use crate::user::adapter::outgoing::security::Argon2Hasher;
use crate::{build_app_state, AppState};

/// Real services over a migrated in-memory SQLite database.
///
/// The pool holds exactly one connection; a second one would open a
/// separate, empty in-memory database.
pub async fn sqlite_app_state() -> web::Data<AppState> {
    let settings = DatabaseSettings {
        engine: DatabaseEngine::Sqlite,
        user: String::new(),
        password: String::new(),
        host: String::new(),
        port: String::new(),
        name: ":memory:".to_string(),
    };

    let conn = connect(&settings, &PoolSettings::single_connection())
        .await
        .expect("in-memory sqlite should open");
    Migrator::up(&conn, None)
        .await
        .expect("migrations should apply");

    let hasher = Argon2Hasher::new(&HasherSettings {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .expect("hasher settings are valid");

    web::Data::new(build_app_state(Arc::new(conn), hasher))
}

/// Builds the service the way `main` wires it: extractor configs, every
/// route and the not-found fallback.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($state)
                .configure(crate::init_routes)
                .default_service(actix_web::web::to(crate::shared::api::route_not_found)),
        )
        .await
    };
}

pub(crate) use init_app;
