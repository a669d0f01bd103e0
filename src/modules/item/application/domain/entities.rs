use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// An active (not soft-deleted) inventory item as exposed by the API.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Item {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Mechanical pencil")]
    pub name: String,
    #[schema(example = 2.5)]
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
