//! User aggregate root.

use super::{Email, Password, UserDomainError, UserId, Username};

/// Registered account with identity and credentials.
///
/// Identity is the [`UserId`]; the [`Email`] is unique across accounts but
/// uniqueness is enforced by the repository, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    email: Email,
    password: Password,
}

/// Parameter object for reconstructing a persisted user aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted identifier in textual UUID form.
    pub id: String,
    /// Persisted username.
    pub username: String,
    /// Persisted email address.
    pub email: String,
    /// Persisted bcrypt hash, trusted as-is.
    pub password_hash: String,
}

impl User {
    /// Registers a new user, hashing the raw password.
    ///
    /// Validation short-circuits on the first failing field in the order
    /// username, email, password.
    ///
    /// # Errors
    ///
    /// Returns the [`UserDomainError`] of the first invalid value object.
    pub fn new(username: &str, email: &str, raw_password: &str) -> Result<Self, UserDomainError> {
        let username = Username::new(username)?;
        let email = Email::new(email)?;
        let password = Password::new(raw_password)?;

        Ok(Self {
            id: UserId::new(),
            username,
            email,
            password,
        })
    }

    /// Reconstructs a user from persisted storage.
    ///
    /// The password hash is wrapped verbatim; it was validated when first
    /// created.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidUserId`] when the identifier is not a
    /// UUID, or the username/email validation error.
    pub fn from_persisted(data: PersistedUserData) -> Result<Self, UserDomainError> {
        let id = UserId::parse(&data.id)?;
        let username = Username::new(data.username)?;
        let email = Email::new(data.email)?;

        Ok(Self {
            id,
            username,
            email,
            password: Password::from_hash(data.password_hash),
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the stored password hash.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Checks a raw password against the stored hash.
    ///
    /// # Errors
    ///
    /// See [`Password::verify`].
    pub fn verify_password(&self, candidate: &str) -> Result<(), UserDomainError> {
        self.password.verify(candidate)
    }

    /// Replaces the username.
    ///
    /// # Errors
    ///
    /// Returns the username validation error; the current value is kept.
    pub fn change_username(&mut self, new_username: &str) -> Result<(), UserDomainError> {
        self.username = Username::new(new_username)?;
        Ok(())
    }

    /// Replaces the email address.
    ///
    /// # Errors
    ///
    /// Returns the email validation error; the current value is kept.
    pub fn change_email(&mut self, new_email: &str) -> Result<(), UserDomainError> {
        self.email = Email::new(new_email)?;
        Ok(())
    }

    /// Replaces the password after verifying the current one.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::PasswordMismatch`] when `old_password` is
    /// wrong, [`UserDomainError::PasswordVerification`] when the stored hash
    /// is unusable, or the validation/hashing error for `new_password`. The
    /// stored hash is unchanged on every error path.
    pub fn change_password(
        &mut self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), UserDomainError> {
        self.password.verify(old_password)?;
        self.password = Password::new(new_password)?;
        Ok(())
    }
}
