use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::user::application::domain::entities::{User, UserCredentials};
use crate::user::application::ports::outgoing::{UserQuery, UserQueryError};

use super::sea_orm_entity::{find_active, Column as UserColumn, Model as UserModel};

#[derive(Debug, Clone)]
pub struct UserQuerySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl UserQuerySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<UserModel>, UserQueryError> {
        find_active()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl UserQuery for UserQuerySeaOrm {
    async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
        let models: Vec<UserModel> = find_active()
            .order_by_asc(UserColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(UserModel::to_user).collect())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .find_active_by_email(email)
            .await?
            .as_ref()
            .map(UserModel::to_user))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError> {
        Ok(self
            .find_active_by_email(email)
            .await?
            .as_ref()
            .map(UserModel::to_credentials))
    }
}
