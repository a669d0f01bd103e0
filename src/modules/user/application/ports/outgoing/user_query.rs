use async_trait::async_trait;

use crate::user::application::domain::entities::{User, UserCredentials};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side. Only active users are ever returned; `email` is expected
/// to be normalized already.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, UserQueryError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError>;
}
