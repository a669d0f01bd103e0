pub mod sea_orm_entity;
pub mod security;
mod user_query_sea_orm;
mod user_repository_sea_orm;

pub use user_query_sea_orm::UserQuerySeaOrm;
pub use user_repository_sea_orm::UserRepositorySeaOrm;
