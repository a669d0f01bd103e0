use async_trait::async_trait;

use crate::user::application::domain::entities::{CredentialsError, User};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error(transparent)]
    InvalidInput(#[from] CredentialsError),

    #[error("User already exists")]
    AlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError>;
}
