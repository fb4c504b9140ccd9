//! Task aggregate root and its completion and deadline state machine.

use super::{Deadline, Description, TaskDomainError, TaskId, Title};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// A task is open while `completed_at` is `None` and completed once it holds
/// the completion timestamp, so the flag and the timestamp cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner_id: UserId,
    title: Title,
    description: Description,
    deadline: Option<Deadline>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identifier.
    pub owner_id: UserId,
    /// Persisted raw title.
    pub title: String,
    /// Persisted raw description.
    pub description: String,
    /// Persisted deadline, if any.
    pub deadline: Option<DateTime<Utc>>,
    /// Persisted completion flag.
    pub is_completed: bool,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates an open task without a deadline.
    ///
    /// # Errors
    ///
    /// Returns the title or description validation error.
    pub fn new(title: &str, description: &str, owner_id: UserId) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id: TaskId::new(),
            owner_id,
            title: Title::new(title)?,
            description: Description::new(description)?,
            deadline: None,
            completed_at: None,
        })
    }

    /// Creates an open task with a deadline in the future.
    ///
    /// # Errors
    ///
    /// Returns the title, description, or deadline validation error.
    pub fn new_with_deadline(
        title: &str,
        description: &str,
        owner_id: UserId,
        deadline: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let mut task = Self::new(title, description, owner_id)?;
        task.deadline = Some(Deadline::new(deadline, clock)?);
        Ok(task)
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InconsistentCompletionState`] when the
    /// completion flag and timestamp disagree, or the title/description
    /// validation error for corrupted content.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TaskDomainError> {
        if data.is_completed != data.completed_at.is_some() {
            return Err(TaskDomainError::InconsistentCompletionState);
        }

        Ok(Self {
            id: data.id,
            owner_id: data.owner_id,
            title: Title::new(data.title)?,
            description: Description::new(data.description)?,
            deadline: data.deadline.map(Deadline::from_persisted),
            completed_at: data.completed_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns `true` when `user` owns this task.
    #[must_use]
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Deadline> {
        self.deadline
    }

    /// Returns `true` when a deadline is set.
    #[must_use]
    pub const fn has_deadline(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` once the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns `true` when an open task has passed its deadline.
    #[must_use]
    pub fn is_overdue(&self, clock: &impl Clock) -> bool {
        !self.is_completed()
            && self
                .deadline
                .is_some_and(|deadline| deadline.is_overdue(clock.utc()))
    }

    /// Replaces the title. The task is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns the title validation error.
    pub fn change_title(&mut self, new_title: &str) -> Result<(), TaskDomainError> {
        self.title = Title::new(new_title)?;
        Ok(())
    }

    /// Replaces the description. The task is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns the description validation error.
    pub fn change_description(&mut self, new_description: &str) -> Result<(), TaskDomainError> {
        self.description = Description::new(new_description)?;
        Ok(())
    }

    /// Adds or replaces the deadline in either completion state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeadlineBeforeNow`] when `deadline` is not
    /// in the future.
    pub fn set_deadline(
        &mut self,
        deadline: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.deadline = Some(Deadline::new(deadline, clock)?);
        Ok(())
    }

    /// Removes the deadline if one is set.
    pub const fn remove_deadline(&mut self) {
        self.deadline = None;
    }

    /// Marks the task completed at the clock's current time.
    ///
    /// Returns `false` without touching the original timestamp when the task
    /// is already completed.
    pub fn complete(&mut self, clock: &impl Clock) -> bool {
        if self.is_completed() {
            return false;
        }
        self.completed_at = Some(clock.utc());
        true
    }

    /// Reopens a completed task.
    ///
    /// Returns `false` when the task is already open.
    pub const fn reopen(&mut self) -> bool {
        if self.completed_at.is_none() {
            return false;
        }
        self.completed_at = None;
        true
    }
}
