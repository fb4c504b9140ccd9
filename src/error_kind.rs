//! Kind-based matching for application errors.
//!
//! Application errors carry payloads (identifiers, wrapped causes) that make
//! direct equality awkward. Each of them exposes a small `Copy` kind instead,
//! so callers such as the transport layer can ask "is this any of these?"
//! without destructuring.

/// Exposes a comparable kind for an error value.
pub trait ErrorKindMatch {
    /// Comparable classification of the error.
    type Kind: Copy + PartialEq;

    /// Returns the kind of this error.
    fn kind(&self) -> Self::Kind;

    /// Returns `true` when the error's kind is one of `kinds`.
    fn is_any(&self, kinds: &[Self::Kind]) -> bool {
        kinds.contains(&self.kind())
    }
}

/// Boxed cause kept by "operation failed" errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
