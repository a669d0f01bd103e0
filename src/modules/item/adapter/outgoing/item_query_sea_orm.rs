use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::item::application::domain::entities::Item;
use crate::item::application::ports::outgoing::{ItemQuery, ItemQueryError};

// SeaORM entity
use super::sea_orm_entity::{find_active, Column as ItemColumn, Model as ItemModel};

#[derive(Debug, Clone)]
pub struct ItemQuerySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl ItemQuerySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemQuery for ItemQuerySeaOrm {
    async fn list_items(&self) -> Result<Vec<Item>, ItemQueryError> {
        let models: Vec<ItemModel> = find_active()
            .order_by_asc(ItemColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| ItemQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(ItemModel::to_item).collect())
    }

    async fn find_item(&self, id: i32) -> Result<Option<Item>, ItemQueryError> {
        let model = find_active()
            .filter(ItemColumn::Id.eq(id))
            .one(&*self.db)
            .await
            .map_err(|e| ItemQueryError::DatabaseError(e.to_string()))?;

        Ok(model.as_ref().map(ItemModel::to_item))
    }
}
