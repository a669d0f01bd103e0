use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A user as exposed by the API. The password hash never leaves the adapter
/// layer through this type.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Only produced for the login check.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CredentialsError {
    #[error("Email must not be empty")]
    EmptyEmail,

    #[error("Password must not be empty")]
    EmptyPassword,
}

/// Emails are stored and looked up trimmed and lowercased.
pub fn normalize_email(raw: &str) -> Result<String, CredentialsError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(CredentialsError::EmptyEmail);
    }
    Ok(email)
}

/// Rejects blank passwords. The password itself is kept as typed.
pub fn validate_password(raw: &str) -> Result<&str, CredentialsError> {
    if raw.trim().is_empty() {
        return Err(CredentialsError::EmptyPassword);
    }
    Ok(raw)
}
