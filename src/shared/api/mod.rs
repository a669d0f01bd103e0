mod cors;
mod json_config;
mod response;

pub use cors::cors_policy;
pub use json_config::{custom_json_config, custom_path_config};
pub use response::{route_not_found, ApiError, ApiResponse};
