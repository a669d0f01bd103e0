use crate::item::application::domain::entities::Item;
use sea_orm::entity::prelude::*;
use sea_orm::Select;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(column_type = "Double")]
    pub price: f64,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,

    /// Soft delete timestamp (NULL = active, set = deleted)
    pub deleted_at: Option<DateTimeUtc>,
}

impl Model {
    pub fn to_item(&self) -> Item {
        Item {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Every read path starts here so soft-deleted rows can never leak out.
pub fn find_active() -> Select<Entity> {
    Entity::find().filter(Column::DeletedAt.is_null())
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        let now = Utc::now();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);

        Ok(self)
    }
}
