use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteItemError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteItemUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteItemError>;
}
