//! Token issuance port used after successful authentication.

use crate::user::domain::UserId;
use async_trait::async_trait;
use thiserror::Error;

/// Issues signed access tokens for authenticated users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Generates a signed token whose subject is `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenProviderError`] when the token cannot be produced.
    async fn generate(&self, user_id: UserId) -> Result<String, TokenProviderError>;
}

/// Errors returned by token providers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenProviderError {
    /// Signing the token failed.
    #[error("failed to sign token: {0}")]
    Signing(String),

    /// The token is malformed, tampered with, or signed with another key.
    #[error("invalid token: {0}")]
    Invalid(String),

    /// The token has expired.
    #[error("token has expired")]
    Expired,

    /// The token was issued by someone else.
    #[error("unexpected token issuer")]
    WrongIssuer,

    /// The subject claim is empty or not a user identifier.
    #[error("invalid token subject '{0}'")]
    InvalidSubject(String),
}
