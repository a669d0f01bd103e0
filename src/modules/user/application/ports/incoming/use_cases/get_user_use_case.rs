use async_trait::async_trait;

use crate::user::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserError {
    #[error("User not found")]
    NotFound,

    #[error("Failed to fetch user: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<User, GetUserError>;
}
