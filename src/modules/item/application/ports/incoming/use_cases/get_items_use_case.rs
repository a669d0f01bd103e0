use async_trait::async_trait;

use crate::item::application::domain::entities::Item;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetItemsError {
    #[error("Failed to fetch items: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Item>, GetItemsError>;
}
