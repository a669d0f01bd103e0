use async_trait::async_trait;

use crate::item::application::{
    ports::incoming::use_cases::{DeleteItemError, DeleteItemUseCase},
    ports::outgoing::ItemRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteItemService<R>
where
    R: ItemRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteItemService<R>
where
    R: ItemRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteItemUseCase for DeleteItemService<R>
where
    R: ItemRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteItemError> {
        self.repository
            .soft_delete_item(id)
            .await
            .map_err(|e| DeleteItemError::RepositoryError(e.to_string()))
    }
}
