use actix_cors::Cors;
use actix_web::http::header;

use crate::config::CorsSettings;

/// Single allowed origin, fixed method/header lists, credentials allowed.
pub fn cors_policy(settings: &CorsSettings) -> Cors {
    Cors::default()
        .allowed_origin(&settings.allowed_origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD"])
        .allowed_headers(vec![
            header::ORIGIN,
            header::CONTENT_LENGTH,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(12 * 60 * 60)
}
