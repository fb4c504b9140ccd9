//! Service layer for registration, login, and profile changes.

use crate::error_kind::{BoxError, ErrorKindMatch};
use crate::user::{
    domain::{Email, User, UserDomainError, UserId},
    ports::{TokenProvider, UserRepository, UserRepositoryError},
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// Request payload for registering a new account.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    username: String,
    email: String,
    password: String,
}

impl RegisterUserRequest {
    /// Creates a registration request from raw input.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Request payload for password login.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    /// Creates a login request from raw input.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// User service operation, used to tag unexpected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserOperation {
    /// Account registration.
    Register,
    /// Password login.
    Login,
    /// Profile lookup.
    FindById,
    /// Username change.
    ChangeUsername,
    /// Email change.
    ChangeEmail,
    /// Password change.
    ChangePassword,
    /// Account deletion.
    Delete,
}

impl UserOperation {
    /// Returns a short human-readable description.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Register => "register user",
            Self::Login => "log in",
            Self::FindById => "find user",
            Self::ChangeUsername => "change username",
            Self::ChangeEmail => "change email",
            Self::ChangePassword => "change password",
            Self::Delete => "delete user",
        }
    }
}

impl fmt::Display for UserOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service-level errors for user account operations.
#[derive(Debug, Error)]
pub enum UserAccountError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),

    /// No matching user exists.
    #[error("user not found")]
    NotFound,

    /// A user with the same identity already exists.
    #[error("user already exists")]
    UserExists,

    /// The supplied credentials are wrong.
    #[error("invalid credentials")]
    Unauthorized,

    /// The requested email address belongs to another account.
    #[error("email '{0}' is already taken")]
    EmailAlreadyTaken(Email),

    /// An unexpected infrastructure failure interrupted the operation.
    #[error("failed to {operation}")]
    Failed {
        /// Operation that failed.
        operation: UserOperation,
        /// Underlying cause.
        #[source]
        source: BoxError,
    },
}

/// Comparable classification of [`UserAccountError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAccountErrorKind {
    /// See [`UserAccountError::Domain`].
    Validation,
    /// See [`UserAccountError::NotFound`].
    NotFound,
    /// See [`UserAccountError::UserExists`].
    UserExists,
    /// See [`UserAccountError::Unauthorized`].
    Unauthorized,
    /// See [`UserAccountError::EmailAlreadyTaken`].
    EmailAlreadyTaken,
    /// See [`UserAccountError::Failed`].
    Failed(UserOperation),
}

impl ErrorKindMatch for UserAccountError {
    type Kind = UserAccountErrorKind;

    fn kind(&self) -> Self::Kind {
        match self {
            Self::Domain(_) => UserAccountErrorKind::Validation,
            Self::NotFound => UserAccountErrorKind::NotFound,
            Self::UserExists => UserAccountErrorKind::UserExists,
            Self::Unauthorized => UserAccountErrorKind::Unauthorized,
            Self::EmailAlreadyTaken(_) => UserAccountErrorKind::EmailAlreadyTaken,
            Self::Failed { operation, .. } => UserAccountErrorKind::Failed(*operation),
        }
    }
}

/// Result type for user account service operations.
pub type UserAccountResult<T> = Result<T, UserAccountError>;

/// User account orchestration service.
#[derive(Clone)]
pub struct UserAccountService<R, T>
where
    R: UserRepository,
    T: TokenProvider,
{
    repository: Arc<R>,
    tokens: Arc<T>,
}

impl<R, T> UserAccountService<R, T>
where
    R: UserRepository,
    T: TokenProvider,
{
    /// Creates a new user account service.
    #[must_use]
    pub const fn new(repository: Arc<R>, tokens: Arc<T>) -> Self {
        Self { repository, tokens }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::Domain`] for invalid input,
    /// [`UserAccountError::UserExists`] when the identity is taken, or
    /// [`UserAccountError::Failed`] for other persistence failures.
    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn register(&self, request: RegisterUserRequest) -> UserAccountResult<User> {
        let user = User::new(&request.username, &request.email, &request.password)?;

        match self.repository.store(&user).await {
            Ok(()) => {
                info!(user_id = %user.id(), "user registered");
                Ok(user)
            }
            Err(err) if err.is_conflict() => Err(UserAccountError::UserExists),
            Err(err) => Err(failed(UserOperation::Register, err)),
        }
    }

    /// Authenticates with email and password and returns an access token.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::NotFound`] for unknown or malformed
    /// addresses, [`UserAccountError::Unauthorized`] for a wrong password, or
    /// [`UserAccountError::Failed`] when lookup, verification, or token
    /// issuance fails unexpectedly.
    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> UserAccountResult<String> {
        // No account can be stored under a malformed address.
        let email = Email::new(request.email).map_err(|_| UserAccountError::NotFound)?;
        let user = self
            .repository
            .find_by_email(&email)
            .await
            .map_err(|err| failed(UserOperation::Login, err))?
            .ok_or(UserAccountError::NotFound)?;

        authenticate(&user, &request.password, UserOperation::Login)?;

        let token = self
            .tokens
            .generate(user.id())
            .await
            .map_err(|err| failed(UserOperation::Login, err))?;
        info!(user_id = %user.id(), "user logged in");
        Ok(token)
    }

    /// Returns the account with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::NotFound`] or
    /// [`UserAccountError::Failed`].
    pub async fn find_by_id(&self, id: UserId) -> UserAccountResult<User> {
        self.find_user_or_error(id, UserOperation::FindById).await
    }

    /// Changes the username after re-checking the password.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::NotFound`],
    /// [`UserAccountError::Unauthorized`], a username validation error, or
    /// [`UserAccountError::Failed`].
    #[instrument(skip_all, fields(user_id = %id))]
    pub async fn change_username(
        &self,
        id: UserId,
        new_username: &str,
        password: &str,
    ) -> UserAccountResult<User> {
        let operation = UserOperation::ChangeUsername;
        let mut user = self.find_user_or_error(id, operation).await?;
        authenticate(&user, password, operation)?;
        user.change_username(new_username)?;
        self.persist_update(&user, operation).await?;
        info!("username changed");
        Ok(user)
    }

    /// Changes the email address after re-checking the password.
    ///
    /// The new address must not belong to a different account.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::NotFound`],
    /// [`UserAccountError::Unauthorized`], an email validation error,
    /// [`UserAccountError::EmailAlreadyTaken`], or
    /// [`UserAccountError::Failed`].
    #[instrument(skip_all, fields(user_id = %id))]
    pub async fn change_email(
        &self,
        id: UserId,
        new_email: &str,
        password: &str,
    ) -> UserAccountResult<User> {
        let operation = UserOperation::ChangeEmail;
        let mut user = self.find_user_or_error(id, operation).await?;
        authenticate(&user, password, operation)?;

        let email = Email::new(new_email)?;
        let holder = self
            .repository
            .find_by_email(&email)
            .await
            .map_err(|err| failed(operation, err))?;
        if holder.is_some_and(|other| other.id() != id) {
            warn!(email = %email, "email change rejected, address in use");
            return Err(UserAccountError::EmailAlreadyTaken(email));
        }

        user.change_email(email.as_str())?;
        self.persist_update(&user, operation).await?;
        info!("email changed");
        Ok(user)
    }

    /// Replaces the password after verifying the current one.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::NotFound`],
    /// [`UserAccountError::Unauthorized`] when `old_password` is wrong, a
    /// password validation error, or [`UserAccountError::Failed`].
    #[instrument(skip_all, fields(user_id = %id))]
    pub async fn change_password(
        &self,
        id: UserId,
        old_password: &str,
        new_password: &str,
    ) -> UserAccountResult<()> {
        let operation = UserOperation::ChangePassword;
        let mut user = self.find_user_or_error(id, operation).await?;
        user.change_password(old_password, new_password)
            .map_err(|err| credential_error(err, operation))?;
        self.persist_update(&user, operation).await?;
        info!("password changed");
        Ok(())
    }

    /// Deletes the account after re-checking the password.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::NotFound`],
    /// [`UserAccountError::Unauthorized`], or [`UserAccountError::Failed`].
    #[instrument(skip_all, fields(user_id = %id))]
    pub async fn delete(&self, id: UserId, password: &str) -> UserAccountResult<()> {
        let operation = UserOperation::Delete;
        let user = self.find_user_or_error(id, operation).await?;
        authenticate(&user, password, operation)?;

        match self.repository.delete(id).await {
            Ok(()) => {
                info!("user deleted");
                Ok(())
            }
            Err(UserRepositoryError::NotFound(_)) => Err(UserAccountError::NotFound),
            Err(err) => Err(failed(operation, err)),
        }
    }

    async fn find_user_or_error(
        &self,
        id: UserId,
        operation: UserOperation,
    ) -> UserAccountResult<User> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| failed(operation, err))?
            .ok_or(UserAccountError::NotFound)
    }

    async fn persist_update(&self, user: &User, operation: UserOperation) -> UserAccountResult<()> {
        match self.repository.update(user).await {
            Ok(()) => Ok(()),
            // The row disappeared between lookup and update.
            Err(UserRepositoryError::NotFound(_)) => Err(UserAccountError::NotFound),
            Err(UserRepositoryError::DuplicateEmail(email)) => {
                Err(UserAccountError::EmailAlreadyTaken(email))
            }
            Err(err) => Err(failed(operation, err)),
        }
    }
}

/// Verifies a password, separating bad credentials from broken hashes.
fn authenticate(user: &User, password: &str, operation: UserOperation) -> UserAccountResult<()> {
    user.verify_password(password)
        .map_err(|err| credential_error(err, operation))
}

fn credential_error(err: UserDomainError, operation: UserOperation) -> UserAccountError {
    match err {
        UserDomainError::PasswordMismatch => {
            warn!(%operation, "password verification failed");
            UserAccountError::Unauthorized
        }
        UserDomainError::PasswordVerification(_) | UserDomainError::PasswordHashing(_) => {
            failed(operation, err)
        }
        other => UserAccountError::Domain(other),
    }
}

fn failed(operation: UserOperation, cause: impl Into<BoxError>) -> UserAccountError {
    let source = cause.into();
    error!(%operation, error = %source, "user operation failed");
    UserAccountError::Failed { operation, source }
}
