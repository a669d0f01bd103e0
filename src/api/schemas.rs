// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by handlers
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    #[schema(example = "ITEM_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Item not found")]
    pub message: String,
}

/// Body returned for any method+path without a handler
#[derive(Serialize, ToSchema)]
pub struct NotFoundResponse {
    #[schema(example = "Not found")]
    pub message: String,
}

/// Single-key confirmation object, e.g. `{"id3": "is deleted"}`
#[derive(Serialize, ToSchema)]
#[schema(example = json!({"id3": "is deleted"}))]
pub struct DeletedResponse(pub std::collections::HashMap<String, String>);
