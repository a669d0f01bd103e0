use async_trait::async_trait;
use std::sync::Arc;

use crate::user::application::{
    domain::entities::{normalize_email, validate_password, User},
    ports::incoming::use_cases::{CreateUserCommand, CreateUserError, CreateUserUseCase},
    ports::outgoing::{CreateUserData, PasswordHasher, UserRepository, UserRepositoryError},
};

#[derive(Clone)]
pub struct CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R> CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R> CreateUserUseCase for CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError> {
        let email = normalize_email(&command.email)?;
        let password = validate_password(&command.password)?;

        let password_hash = self
            .hasher
            .hash_password(password)
            .await
            .map_err(|e| CreateUserError::HashFailed(e.to_string()))?;

        self.repository
            .create_user(CreateUserData {
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::AlreadyExists,
                other => CreateUserError::RepositoryError(other.to_string()),
            })
    }
}
