use async_trait::async_trait;

use crate::item::application::domain::entities::Item;

// Input DTO for creating an item. Ids and timestamps are assigned by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateItemData {
    pub name: String,
    pub price: f64,
}

// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateItemData {
    pub name: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ItemRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Item not found")]
    ItemNotFound,
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create_item(&self, data: CreateItemData) -> Result<Item, ItemRepositoryError>;

    /// Loads the active row, overlays `data` and persists the result.
    async fn update_item(&self, id: i32, data: UpdateItemData) -> Result<Item, ItemRepositoryError>;

    /// Marks the active row deleted. Succeeds when nothing matched.
    async fn soft_delete_item(&self, id: i32) -> Result<(), ItemRepositoryError>;
}
