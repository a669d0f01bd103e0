use async_trait::async_trait;

use crate::item::application::{domain::entities::Item, ports::outgoing::UpdateItemData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateItemError {
    #[error("Item not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, id: i32, data: UpdateItemData) -> Result<Item, UpdateItemError>;
}
