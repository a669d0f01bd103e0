use async_trait::async_trait;

use crate::item::application::{domain::entities::Item, ports::outgoing::CreateItemData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateItemError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateItemUseCase: Send + Sync {
    async fn execute(&self, data: CreateItemData) -> Result<Item, CreateItemError>;
}
