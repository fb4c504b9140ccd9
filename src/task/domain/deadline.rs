//! Task deadline value object.

use super::TaskDomainError;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in time by which a task should be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(DateTime<Utc>);

impl Deadline {
    /// Creates a deadline that lies strictly after the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeadlineBeforeNow`] when `value` is now or
    /// earlier.
    pub fn new(value: DateTime<Utc>, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        if value <= clock.utc() {
            return Err(TaskDomainError::DeadlineBeforeNow);
        }
        Ok(Self(value))
    }

    /// Wraps a stored deadline without the future check.
    ///
    /// Deadlines that were valid when set may have passed since.
    #[must_use]
    pub const fn from_persisted(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    /// Returns the deadline timestamp.
    #[must_use]
    pub const fn value(self) -> DateTime<Utc> {
        self.0
    }

    /// Returns `true` when the deadline is strictly earlier than `instant`.
    #[must_use]
    pub fn is_before(self, instant: DateTime<Utc>) -> bool {
        self.0 < instant
    }

    /// Returns `true` when the deadline is strictly later than `instant`.
    #[must_use]
    pub fn is_after(self, instant: DateTime<Utc>) -> bool {
        self.0 > instant
    }

    /// Returns `true` once `now` has reached the deadline.
    #[must_use]
    pub fn is_overdue(self, now: DateTime<Utc>) -> bool {
        !self.is_after(now)
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
