use async_trait::async_trait;

use crate::item::application::{
    domain::entities::Item,
    ports::incoming::use_cases::{CreateItemError, CreateItemUseCase},
    ports::outgoing::{CreateItemData, ItemRepository},
};

#[derive(Debug, Clone)]
pub struct CreateItemService<R>
where
    R: ItemRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateItemService<R>
where
    R: ItemRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateItemUseCase for CreateItemService<R>
where
    R: ItemRepository + Send + Sync,
{
    async fn execute(&self, data: CreateItemData) -> Result<Item, CreateItemError> {
        self.repository
            .create_item(data)
            .await
            .map_err(|e| CreateItemError::RepositoryError(e.to_string()))
    }
}
