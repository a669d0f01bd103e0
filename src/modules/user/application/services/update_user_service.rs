use async_trait::async_trait;
use std::sync::Arc;

use crate::user::application::{
    domain::entities::{normalize_email, validate_password, User},
    ports::incoming::use_cases::{UpdateUserCommand, UpdateUserError, UpdateUserUseCase},
    ports::outgoing::{PasswordHasher, UpdateUserData, UserRepository, UserRepositoryError},
};

#[derive(Clone)]
pub struct UpdateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R> UpdateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R> UpdateUserUseCase for UpdateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        email: &str,
        command: UpdateUserCommand,
    ) -> Result<User, UpdateUserError> {
        let current_email = normalize_email(email).map_err(|_| UpdateUserError::NotFound)?;

        let new_email = command
            .email
            .as_deref()
            .map(normalize_email)
            .transpose()?;

        let password_hash = match command.password.as_deref() {
            Some(password) => {
                let password = validate_password(password)?;
                let hash = self
                    .hasher
                    .hash_password(password)
                    .await
                    .map_err(|e| UpdateUserError::HashFailed(e.to_string()))?;
                Some(hash)
            }
            None => None,
        };

        self.repository
            .update_user(
                &current_email,
                UpdateUserData {
                    email: new_email,
                    password_hash,
                },
            )
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserError::NotFound,
                UserRepositoryError::UserAlreadyExists => UpdateUserError::AlreadyExists,
                other => UpdateUserError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::application::domain::entities::CredentialsError;
    use crate::user::application::ports::outgoing::{CreateUserData, HashError};
    use chrono::Utc;
    use std::sync::Mutex;

    struct PrefixHasher;

    #[async_trait]
    impl PasswordHasher for PrefixHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{password}"))
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct RecordingUserRepository {
        result: Option<UserRepositoryError>,
        received: Arc<Mutex<Option<(String, UpdateUserData)>>>,
    }

    #[async_trait]
    impl UserRepository for RecordingUserRepository {
        async fn create_user(&self, _data: CreateUserData) -> Result<User, UserRepositoryError> {
            unimplemented!()
        }

        async fn update_user(
            &self,
            email: &str,
            data: UpdateUserData,
        ) -> Result<User, UserRepositoryError> {
            *self.received.lock().unwrap() = Some((email.to_string(), data.clone()));
            if let Some(err) = self.result.clone() {
                return Err(err);
            }
            let now = Utc::now();
            Ok(User {
                id: 2,
                email: data.email.unwrap_or_else(|| email.to_string()),
                created_at: now,
                updated_at: now,
            })
        }

        async fn soft_delete_user(&self, _email: &str) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn update_password_only_rehashes_and_keeps_email() {
        let repo = RecordingUserRepository::default();
        let received = Arc::clone(&repo.received);
        let service = UpdateUserService::new(repo, Arc::new(PrefixHasher));

        let user = service
            .execute(
                "Jane@example.com",
                UpdateUserCommand {
                    email: None,
                    password: Some("new-pass".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(user.email, "jane@example.com");
        let (email, data) = received.lock().unwrap().clone().unwrap();
        assert_eq!(email, "jane@example.com");
        assert_eq!(
            data,
            UpdateUserData {
                email: None,
                password_hash: Some("hashed:new-pass".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn update_email_is_normalized() {
        let repo = RecordingUserRepository::default();
        let received = Arc::clone(&repo.received);
        let service = UpdateUserService::new(repo, Arc::new(PrefixHasher));

        service
            .execute(
                "jane@example.com",
                UpdateUserCommand {
                    email: Some(" JD@Example.com ".to_string()),
                    password: None,
                },
            )
            .await
            .unwrap();

        let (_, data) = received.lock().unwrap().clone().unwrap();
        assert_eq!(data.email.as_deref(), Some("jd@example.com"));
        assert_eq!(data.password_hash, None);
    }

    #[tokio::test]
    async fn update_blank_new_email_is_invalid() {
        let service =
            UpdateUserService::new(RecordingUserRepository::default(), Arc::new(PrefixHasher));

        let result = service
            .execute(
                "jane@example.com",
                UpdateUserCommand {
                    email: Some(" ".to_string()),
                    password: None,
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(UpdateUserError::InvalidInput(CredentialsError::EmptyEmail))
        ));
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let service = UpdateUserService::new(
            RecordingUserRepository {
                result: Some(UserRepositoryError::UserNotFound),
                ..Default::default()
            },
            Arc::new(PrefixHasher),
        );

        let result = service
            .execute("ghost@example.com", UpdateUserCommand::default())
            .await;

        assert!(matches!(result, Err(UpdateUserError::NotFound)));
    }

    #[tokio::test]
    async fn update_email_collision_is_already_exists() {
        let service = UpdateUserService::new(
            RecordingUserRepository {
                result: Some(UserRepositoryError::UserAlreadyExists),
                ..Default::default()
            },
            Arc::new(PrefixHasher),
        );

        let result = service
            .execute(
                "jane@example.com",
                UpdateUserCommand {
                    email: Some("taken@example.com".to_string()),
                    password: None,
                },
            )
            .await;

        assert!(matches!(result, Err(UpdateUserError::AlreadyExists)));
    }
}
