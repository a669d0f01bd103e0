use async_trait::async_trait;

use crate::user::application::domain::entities::User;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserData {
    pub email: String,
    pub password_hash: String,
}

// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserData {
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    /// Loads the active user by email, overlays `data` and persists it.
    async fn update_user(
        &self,
        email: &str,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError>;

    /// Marks the active user deleted. Succeeds when nothing matched.
    async fn soft_delete_user(&self, email: &str) -> Result<(), UserRepositoryError>;
}
