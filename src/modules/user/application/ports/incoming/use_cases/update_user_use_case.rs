use async_trait::async_trait;

use crate::user::application::domain::entities::{CredentialsError, User};

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserCommand {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserError {
    #[error(transparent)]
    InvalidInput(#[from] CredentialsError),

    #[error("User not found")]
    NotFound,

    #[error("User already exists")]
    AlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, email: &str, command: UpdateUserCommand)
        -> Result<User, UpdateUserError>;
}
