use async_trait::async_trait;

use crate::user::application::domain::entities::{CredentialsError, User};

#[derive(Debug, Clone, PartialEq)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    InvalidInput(#[from] CredentialsError),

    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Failed to fetch user: {0}")]
    QueryFailed(String),

    #[error("Password verification failed: {0}")]
    HashFailed(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<User, LoginError>;
}
