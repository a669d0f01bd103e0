use async_trait::async_trait;

use crate::user::application::{
    domain::entities::normalize_email,
    ports::incoming::use_cases::{DeleteUserError, DeleteUserUseCase},
    ports::outgoing::UserRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteUserUseCase for DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<(), DeleteUserError> {
        // Nothing can match a blank email, and deleting nothing is a success.
        let Ok(email) = normalize_email(email) else {
            return Ok(());
        };

        self.repository
            .soft_delete_user(&email)
            .await
            .map_err(|e| DeleteUserError::RepositoryError(e.to_string()))
    }
}
