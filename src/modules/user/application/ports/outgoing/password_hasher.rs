use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,

    #[error("Invalid hasher parameters: {0}")]
    InvalidParams(String),
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
