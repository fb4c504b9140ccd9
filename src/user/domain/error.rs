//! Error types for user domain validation and credential checks.

use thiserror::Error;

/// Errors returned while constructing or mutating user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The username is empty.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The username is shorter than the minimum length.
    #[error("username is too short, expected at least {min} characters")]
    UsernameTooShort {
        /// Minimum accepted length in characters.
        min: usize,
    },

    /// The username exceeds the maximum length.
    #[error("username is too long, expected at most {max} characters")]
    UsernameTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The email is empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,

    /// The email is not a syntactically valid address.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The raw password is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The raw password contains non-ASCII characters.
    #[error("password must contain only ASCII characters")]
    NonAsciiPassword,

    /// The raw password is shorter than the minimum length.
    #[error("password is too short, expected at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length in bytes.
        min: usize,
    },

    /// The raw password exceeds the maximum length.
    #[error("password is too long, expected at most {max} characters")]
    PasswordTooLong {
        /// Maximum accepted length in bytes.
        max: usize,
    },

    /// Hashing the raw password failed.
    #[error("failed to hash password: {0}")]
    PasswordHashing(String),

    /// The candidate password does not match the stored hash.
    #[error("password does not match")]
    PasswordMismatch,

    /// The stored hash could not be used for verification.
    #[error("failed to verify password: {0}")]
    PasswordVerification(String),

    /// The persisted user identifier is not a UUID.
    #[error("invalid user identifier '{0}'")]
    InvalidUserId(String),
}
