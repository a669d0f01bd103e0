use async_trait::async_trait;

use crate::item::application::{
    domain::entities::Item,
    ports::incoming::use_cases::{GetItemsError, GetItemsUseCase},
    ports::outgoing::ItemQuery,
};

#[derive(Debug, Clone)]
pub struct GetItemsService<Q>
where
    Q: ItemQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetItemsService<Q>
where
    Q: ItemQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetItemsUseCase for GetItemsService<Q>
where
    Q: ItemQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Item>, GetItemsError> {
        self.query
            .list_items()
            .await
            .map_err(|e| GetItemsError::QueryFailed(e.to_string()))
    }
}
