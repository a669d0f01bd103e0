use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use std::sync::Arc;

use crate::user::application::domain::entities::User;
use crate::user::application::ports::outgoing::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::{
    find_active, ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};

#[derive(Debug, Clone)]
pub struct UserRepositorySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl UserRepositorySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Deleted rows never hold an email; only active ones count.
    async fn ensure_email_free(&self, email: &str) -> Result<(), UserRepositoryError> {
        let holder = find_active()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        match holder {
            Some(_) => Err(UserRepositoryError::UserAlreadyExists),
            None => Ok(()),
        }
    }
}

/// Unique email violations surface as `UserAlreadyExists` on every engine.
fn map_write_error(e: DbErr) -> UserRepositoryError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return UserRepositoryError::UserAlreadyExists;
    }

    let msg = e.to_string().to_lowercase();
    if msg.contains("23505") || msg.contains("duplicate") || msg.contains("unique constraint") {
        return UserRepositoryError::UserAlreadyExists;
    }

    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositorySeaOrm {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        self.ensure_email_free(&data.email).await?;

        let active = UserActiveModel {
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            ..Default::default()
        };

        let inserted: UserModel = active.insert(&*self.db).await.map_err(map_write_error)?;

        Ok(inserted.to_user())
    }

    async fn update_user(
        &self,
        email: &str,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        let user = find_active()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        if let Some(new_email) = data.email.as_deref() {
            if new_email != user.email {
                self.ensure_email_free(new_email).await?;
            }
        }

        let mut active_user: UserActiveModel = user.into();
        if let Some(new_email) = data.email {
            active_user.email = Set(new_email);
        }
        if let Some(password_hash) = data.password_hash {
            active_user.password_hash = Set(password_hash);
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(map_write_error)?;

        Ok(updated.to_user())
    }

    async fn soft_delete_user(&self, email: &str) -> Result<(), UserRepositoryError> {
        let now = Utc::now();

        UserEntity::update_many()
            .col_expr(UserColumn::DeletedAt, Expr::value(now))
            .col_expr(UserColumn::UpdatedAt, Expr::value(now))
            .filter(UserColumn::Email.eq(email))
            .filter(UserColumn::DeletedAt.is_null())
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
