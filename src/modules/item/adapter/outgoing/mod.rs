mod item_query_sea_orm;
mod item_repository_sea_orm;
pub mod sea_orm_entity;

pub use item_query_sea_orm::ItemQuerySeaOrm;
pub use item_repository_sea_orm::ItemRepositorySeaOrm;
