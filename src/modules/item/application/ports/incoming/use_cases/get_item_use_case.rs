use async_trait::async_trait;

use crate::item::application::domain::entities::Item;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetItemError {
    #[error("Item not found")]
    NotFound,

    #[error("Failed to fetch item: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetItemUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<Item, GetItemError>;
}
