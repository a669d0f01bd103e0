use async_trait::async_trait;

use crate::item::application::{
    domain::entities::Item,
    ports::incoming::use_cases::{UpdateItemError, UpdateItemUseCase},
    ports::outgoing::{ItemRepository, ItemRepositoryError, UpdateItemData},
};

#[derive(Debug, Clone)]
pub struct UpdateItemService<R>
where
    R: ItemRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateItemService<R>
where
    R: ItemRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateItemUseCase for UpdateItemService<R>
where
    R: ItemRepository + Send + Sync,
{
    async fn execute(&self, id: i32, data: UpdateItemData) -> Result<Item, UpdateItemError> {
        self.repository
            .update_item(id, data)
            .await
            .map_err(|e| match e {
                ItemRepositoryError::ItemNotFound => UpdateItemError::NotFound,
                other => UpdateItemError::RepositoryError(other.to_string()),
            })
    }
}
