//! Authentication errors.

use atelier_commerce::FieldErrors;
use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The form failed validation.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Signup with an email that already has an account.
    #[error("An account with this email already exists")]
    EmailTaken,

    /// Unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Hashing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Local storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] atelier_cache::CacheError),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials | AuthError::EmailTaken)
    }

    /// Field errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AuthError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for AuthError {
    fn from(errors: FieldErrors) -> Self {
        AuthError::Validation(errors)
    }
}
