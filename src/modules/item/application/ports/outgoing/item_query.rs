use async_trait::async_trait;

use crate::item::application::domain::entities::Item;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ItemQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side. Implementations only ever return rows whose `deleted_at` is NULL.
#[async_trait]
pub trait ItemQuery: Send + Sync {
    async fn list_items(&self) -> Result<Vec<Item>, ItemQueryError>;

    async fn find_item(&self, id: i32) -> Result<Option<Item>, ItemQueryError>;
}
