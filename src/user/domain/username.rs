//! Display name value object.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated user display name, 2 to 30 Unicode scalar values long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Minimum length in characters.
    pub const MIN_LENGTH: usize = 2;
    /// Maximum length in characters.
    pub const MAX_LENGTH: usize = 30;

    /// Creates a validated username.
    ///
    /// The value is kept verbatim; surrounding whitespace counts towards the
    /// length.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyUsername`],
    /// [`UserDomainError::UsernameTooShort`] or
    /// [`UserDomainError::UsernameTooLong`] when the length is out of bounds.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(UserDomainError::EmptyUsername);
        }

        let length = raw.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(UserDomainError::UsernameTooShort {
                min: Self::MIN_LENGTH,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(UserDomainError::UsernameTooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(raw))
    }

    /// Returns the username as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
