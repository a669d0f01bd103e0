use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::item::application::domain::entities::Item;
use crate::item::application::ports::outgoing::{
    CreateItemData, ItemRepository, ItemRepositoryError, UpdateItemData,
};

// SeaORM entity imports
use super::sea_orm_entity::{
    find_active, ActiveModel as ItemActiveModel, Column as ItemColumn, Entity as ItemEntity,
    Model as ItemModel,
};

#[derive(Debug, Clone)]
pub struct ItemRepositorySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl ItemRepositorySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositorySeaOrm {
    async fn create_item(&self, data: CreateItemData) -> Result<Item, ItemRepositoryError> {
        let active = ItemActiveModel {
            name: Set(data.name),
            price: Set(data.price),
            ..Default::default()
        };

        let inserted: ItemModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| ItemRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_item())
    }

    async fn update_item(
        &self,
        id: i32,
        data: UpdateItemData,
    ) -> Result<Item, ItemRepositoryError> {
        let item = find_active()
            .filter(ItemColumn::Id.eq(id))
            .one(&*self.db)
            .await
            .map_err(|e| ItemRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ItemRepositoryError::ItemNotFound)?;

        let mut active_item: ItemActiveModel = item.into();
        if let Some(name) = data.name {
            active_item.name = Set(name);
        }
        if let Some(price) = data.price {
            active_item.price = Set(price);
        }

        let updated = active_item
            .update(&*self.db)
            .await
            .map_err(|e| ItemRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_item())
    }

    async fn soft_delete_item(&self, id: i32) -> Result<(), ItemRepositoryError> {
        let now = Utc::now();

        ItemEntity::update_many()
            .col_expr(ItemColumn::DeletedAt, Expr::value(now))
            .col_expr(ItemColumn::UpdatedAt, Expr::value(now))
            .filter(ItemColumn::Id.eq(id))
            .filter(ItemColumn::DeletedAt.is_null())
            .exec(&*self.db)
            .await
            .map_err(|e| ItemRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
