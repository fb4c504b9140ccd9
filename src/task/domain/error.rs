//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing or mutating task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The title exceeds the maximum length.
    #[error("task title must be at most {max} characters")]
    TitleTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The description exceeds the maximum length.
    #[error("task description must be at most {max} characters")]
    DescriptionTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The deadline is not strictly in the future.
    #[error("deadline must be in the future")]
    DeadlineBeforeNow,

    /// Persisted completion flag and completion timestamp disagree.
    #[error("task completion flag and completion timestamp contradict each other")]
    InconsistentCompletionState,
}
