use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), DeleteUserError>;
}
