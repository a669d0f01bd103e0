use async_trait::async_trait;

use crate::user::application::{
    domain::entities::{normalize_email, User},
    ports::incoming::use_cases::{GetUserError, GetUserUseCase},
    ports::outgoing::UserQuery,
};

#[derive(Debug, Clone)]
pub struct GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserUseCase for GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<User, GetUserError> {
        // A blank email can never match a stored user.
        let email = normalize_email(email).map_err(|_| GetUserError::NotFound)?;

        self.query
            .find_user_by_email(&email)
            .await
            .map_err(|e| GetUserError::QueryFailed(e.to_string()))?
            .ok_or(GetUserError::NotFound)
    }
}
