use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::user::application::{
    domain::entities::{normalize_email, validate_password, User},
    ports::incoming::use_cases::{LoginCommand, LoginError, LoginUserUseCase},
    ports::outgoing::{PasswordHasher, UserQuery},
};

const DUMMY_PASSWORD: &str = "not-a-real-account";

/// Checks a credential pair. No token or session is issued.
///
/// Unknown emails still pay for one hash verification, against a hash made
/// once with the configured parameters, so response time does not reveal
/// whether an account exists.
#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher>,
    dummy_hash: Arc<OnceCell<String>>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            hasher,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    async fn verify_against_dummy(&self, password: &str) {
        let dummy = self
            .dummy_hash
            .get_or_try_init(|| self.hasher.hash_password(DUMMY_PASSWORD))
            .await;

        match dummy {
            Ok(hash) => {
                let _ = self.hasher.verify_password(password, hash).await;
            }
            Err(e) => tracing::warn!("Dummy hash unavailable: {}", e),
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<User, LoginError> {
        let email = normalize_email(&command.email)?;
        let password = validate_password(&command.password)?;

        let Some(credentials) = self
            .query
            .find_credentials_by_email(&email)
            .await
            .map_err(|e| LoginError::QueryFailed(e.to_string()))?
        else {
            self.verify_against_dummy(password).await;
            return Err(LoginError::InvalidCredentials);
        };

        let matches = self
            .hasher
            .verify_password(password, &credentials.password_hash)
            .await
            .map_err(|e| LoginError::HashFailed(e.to_string()))?;

        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        Ok(credentials.user)
    }
}
