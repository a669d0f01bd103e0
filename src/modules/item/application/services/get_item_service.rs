use async_trait::async_trait;

use crate::item::application::{
    domain::entities::Item,
    ports::incoming::use_cases::{GetItemError, GetItemUseCase},
    ports::outgoing::ItemQuery,
};

#[derive(Debug, Clone)]
pub struct GetItemService<Q>
where
    Q: ItemQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetItemService<Q>
where
    Q: ItemQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetItemUseCase for GetItemService<Q>
where
    Q: ItemQuery + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<Item, GetItemError> {
        self.query
            .find_item(id)
            .await
            .map_err(|e| GetItemError::QueryFailed(e.to_string()))?
            .ok_or(GetItemError::NotFound)
    }
}
