// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::web::{JsonConfig, PathConfig};

/// Malformed or mistyped JSON bodies become 400 instead of zero-valued records.
/// Oversized bodies keep 413 and non-JSON content types keep 415.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        let response = match &err {
            JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                ApiResponse::error(StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", &message)
            }
            JsonPayloadError::ContentType => ApiResponse::error(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                &message,
            ),
            _ => ApiResponse::bad_request("VALIDATION_ERROR", &message),
        };

        actix_web::error::InternalError::from_response(err, response).into()
    })
}

/// Path segments that fail to bind (e.g. a non-numeric item id) become 400.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_PATH", &message),
        )
        .into()
    })
}
