mod item_query;
mod item_repository;

pub use item_query::{ItemQuery, ItemQueryError};
pub use item_repository::{CreateItemData, ItemRepository, ItemRepositoryError, UpdateItemData};
