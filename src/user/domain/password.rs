//! One-way password hash value object.

use super::UserDomainError;
use std::fmt;

/// Salted bcrypt hash of a user password.
///
/// The raw password is never stored. Two construction paths exist:
/// [`Password::new`] validates and hashes raw input, while
/// [`Password::from_hash`] trusts a hash that was produced earlier.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

impl Password {
    /// Minimum raw length in bytes.
    pub const MIN_LENGTH: usize = 8;
    /// Maximum raw length in bytes; bcrypt ignores anything beyond it, so
    /// longer candidates never match.
    pub const MAX_LENGTH: usize = 72;
    /// bcrypt work factor applied to every new hash.
    pub const HASH_COST: u32 = 10;

    /// Validates and hashes a raw password.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyPassword`],
    /// [`UserDomainError::NonAsciiPassword`],
    /// [`UserDomainError::PasswordTooShort`] or
    /// [`UserDomainError::PasswordTooLong`] for invalid input, and
    /// [`UserDomainError::PasswordHashing`] when bcrypt fails.
    pub fn new(raw: &str) -> Result<Self, UserDomainError> {
        validate_raw(raw)?;
        let hash = bcrypt::hash(raw, Self::HASH_COST)
            .map_err(|err| UserDomainError::PasswordHashing(err.to_string()))?;
        Ok(Self { hash })
    }

    /// Wraps an existing hash verbatim, without validation.
    #[must_use]
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Checks a raw candidate against the stored hash.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::PasswordMismatch`] when the candidate is
    /// wrong and [`UserDomainError::PasswordVerification`] when the stored
    /// hash cannot be used (for example, a corrupted value).
    pub fn verify(&self, candidate: &str) -> Result<(), UserDomainError> {
        if candidate.len() > Self::MAX_LENGTH {
            return Err(UserDomainError::PasswordMismatch);
        }
        match bcrypt::verify(candidate, &self.hash) {
            Ok(true) => Ok(()),
            Ok(false) => Err(UserDomainError::PasswordMismatch),
            Err(err) => Err(UserDomainError::PasswordVerification(err.to_string())),
        }
    }

    /// Returns the hash in its storage form.
    #[must_use]
    pub fn as_hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password").finish_non_exhaustive()
    }
}

fn validate_raw(raw: &str) -> Result<(), UserDomainError> {
    if raw.is_empty() {
        return Err(UserDomainError::EmptyPassword);
    }
    if !raw.is_ascii() {
        return Err(UserDomainError::NonAsciiPassword);
    }
    if raw.len() < Password::MIN_LENGTH {
        return Err(UserDomainError::PasswordTooShort {
            min: Password::MIN_LENGTH,
        });
    }
    if raw.len() > Password::MAX_LENGTH {
        return Err(UserDomainError::PasswordTooLong {
            max: Password::MAX_LENGTH,
        });
    }
    Ok(())
}
