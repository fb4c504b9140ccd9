//! Repository port for user persistence and lookup.

use crate::user::domain::{Email, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUser`] when the identifier is
    /// already stored or [`UserRepositoryError::DuplicateEmail`] when another
    /// account owns the address.
    async fn store(&self, user: &User) -> UserRepositoryResult<()>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Finds a user by email address.
    ///
    /// Returns `None` when no account uses the address.
    async fn find_by_email(&self, email: &Email) -> UserRepositoryResult<Option<User>>;

    /// Persists changes to an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when no row was affected and
    /// [`UserRepositoryError::DuplicateEmail`] when the new address collides.
    async fn update(&self, user: &User) -> UserRepositoryResult<()>;

    /// Removes a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when no row was affected.
    async fn delete(&self, id: UserId) -> UserRepositoryResult<()>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// A user with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// Another user already owns the email address.
    #[error("duplicate email address: {0}")]
    DuplicateEmail(Email),

    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` for the "already exists" signals.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateUser(_) | Self::DuplicateEmail(_))
    }
}
