//! Service layer for task creation, mutation, completion, and lookup.
//!
//! Every operation on an existing task follows the same path: look the task
//! up, check that the requester owns it, apply the domain mutation, and
//! persist the result. Ownership is checked before the mutation is
//! attempted, so a foreign requester never learns whether their input would
//! have been valid.

use crate::error_kind::{BoxError, ErrorKindMatch};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    owner_id: UserId,
    deadline: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request for a task without a deadline.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, owner_id: UserId) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            owner_id,
            deadline: None,
        }
    }

    /// Sets the task deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Task service operation, used to tag unexpected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskOperation {
    /// Task creation.
    Create,
    /// Title change.
    ChangeTitle,
    /// Description change.
    ChangeDescription,
    /// Deadline assignment.
    SetDeadline,
    /// Deadline removal.
    RemoveDeadline,
    /// Completion.
    Complete,
    /// Reopening.
    Reopen,
    /// Listing by owner.
    FindByOwner,
    /// Single task lookup.
    FindById,
    /// Task deletion.
    Delete,
}

impl TaskOperation {
    /// Returns a short human-readable description.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create task",
            Self::ChangeTitle => "change title",
            Self::ChangeDescription => "change description",
            Self::SetDeadline => "set deadline",
            Self::RemoveDeadline => "remove deadline",
            Self::Complete => "complete task",
            Self::Reopen => "reopen task",
            Self::FindByOwner => "find tasks by owner",
            Self::FindById => "find task",
            Self::Delete => "delete task",
        }
    }
}

impl fmt::Display for TaskOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// No task with the identifier exists.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The requester does not own the task.
    #[error("access to task {task_id} denied")]
    AccessDenied {
        /// Task the requester tried to reach.
        task_id: TaskId,
        /// User that made the request.
        requester: UserId,
    },

    /// A task with the same identifier already exists.
    #[error("task already exists")]
    TaskExists,

    /// The owner named in a create request does not exist.
    #[error("task owner not found: {0}")]
    OwnerNotFound(UserId),

    /// An unexpected infrastructure failure interrupted the operation.
    #[error("failed to {operation}")]
    Failed {
        /// Operation that failed.
        operation: TaskOperation,
        /// Underlying cause.
        #[source]
        source: BoxError,
    },
}

/// Comparable classification of [`TaskLifecycleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskLifecycleErrorKind {
    /// See [`TaskLifecycleError::Domain`].
    Validation,
    /// See [`TaskLifecycleError::NotFound`].
    NotFound,
    /// See [`TaskLifecycleError::AccessDenied`].
    AccessDenied,
    /// See [`TaskLifecycleError::TaskExists`].
    TaskExists,
    /// See [`TaskLifecycleError::OwnerNotFound`].
    OwnerNotFound,
    /// See [`TaskLifecycleError::Failed`].
    Failed(TaskOperation),
}

impl ErrorKindMatch for TaskLifecycleError {
    type Kind = TaskLifecycleErrorKind;

    fn kind(&self) -> Self::Kind {
        match self {
            Self::Domain(_) => TaskLifecycleErrorKind::Validation,
            Self::NotFound(_) => TaskLifecycleErrorKind::NotFound,
            Self::AccessDenied { .. } => TaskLifecycleErrorKind::AccessDenied,
            Self::TaskExists => TaskLifecycleErrorKind::TaskExists,
            Self::OwnerNotFound(_) => TaskLifecycleErrorKind::OwnerNotFound,
            Self::Failed { operation, .. } => TaskLifecycleErrorKind::Failed(*operation),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task, with a deadline when the request carries one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for invalid input (the
    /// repository is not called), [`TaskLifecycleError::TaskExists`],
    /// [`TaskLifecycleError::OwnerNotFound`], or
    /// [`TaskLifecycleError::Failed`].
    #[instrument(skip_all, fields(owner_id = %request.owner_id))]
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let task = match request.deadline {
            Some(deadline) => Task::new_with_deadline(
                &request.title,
                &request.description,
                request.owner_id,
                deadline,
                &*self.clock,
            )?,
            None => Task::new(&request.title, &request.description, request.owner_id)?,
        };

        match self.repository.store(&task).await {
            Ok(()) => {
                info!(task_id = %task.id(), "task created");
                Ok(task)
            }
            Err(TaskRepositoryError::DuplicateTask(_)) => Err(TaskLifecycleError::TaskExists),
            Err(TaskRepositoryError::OwnerNotFound(owner)) => {
                Err(TaskLifecycleError::OwnerNotFound(owner))
            }
            Err(err) => Err(failed(TaskOperation::Create, err)),
        }
    }

    /// Replaces the title of a task owned by `requester`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`],
    /// [`TaskLifecycleError::AccessDenied`], a title validation error, or
    /// [`TaskLifecycleError::Failed`].
    #[instrument(skip_all, fields(task_id = %id, requester = %requester))]
    pub async fn change_title(
        &self,
        id: TaskId,
        requester: UserId,
        new_title: &str,
    ) -> TaskLifecycleResult<Task> {
        self.mutate(id, requester, TaskOperation::ChangeTitle, |task| {
            task.change_title(new_title).map(|()| true)
        })
        .await
    }

    /// Replaces the description of a task owned by `requester`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`],
    /// [`TaskLifecycleError::AccessDenied`], a description validation error,
    /// or [`TaskLifecycleError::Failed`].
    #[instrument(skip_all, fields(task_id = %id, requester = %requester))]
    pub async fn change_description(
        &self,
        id: TaskId,
        requester: UserId,
        new_description: &str,
    ) -> TaskLifecycleResult<Task> {
        self.mutate(id, requester, TaskOperation::ChangeDescription, |task| {
            task.change_description(new_description).map(|()| true)
        })
        .await
    }

    /// Adds or replaces the deadline of a task owned by `requester`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`],
    /// [`TaskLifecycleError::AccessDenied`],
    /// [`TaskDomainError::DeadlineBeforeNow`], or
    /// [`TaskLifecycleError::Failed`].
    #[instrument(skip_all, fields(task_id = %id, requester = %requester))]
    pub async fn set_deadline(
        &self,
        id: TaskId,
        requester: UserId,
        deadline: DateTime<Utc>,
    ) -> TaskLifecycleResult<Task> {
        let clock = &*self.clock;
        self.mutate(id, requester, TaskOperation::SetDeadline, |task| {
            task.set_deadline(deadline, clock).map(|()| true)
        })
        .await
    }

    /// Removes the deadline of a task owned by `requester`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`],
    /// [`TaskLifecycleError::AccessDenied`], or
    /// [`TaskLifecycleError::Failed`].
    #[instrument(skip_all, fields(task_id = %id, requester = %requester))]
    pub async fn remove_deadline(&self, id: TaskId, requester: UserId) -> TaskLifecycleResult<Task> {
        self.mutate(id, requester, TaskOperation::RemoveDeadline, |task| {
            task.remove_deadline();
            Ok(true)
        })
        .await
    }

    /// Marks a task owned by `requester` as completed.
    ///
    /// Completing an already completed task succeeds without a write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`],
    /// [`TaskLifecycleError::AccessDenied`], or
    /// [`TaskLifecycleError::Failed`].
    #[instrument(skip_all, fields(task_id = %id, requester = %requester))]
    pub async fn complete(&self, id: TaskId, requester: UserId) -> TaskLifecycleResult<Task> {
        let clock = &*self.clock;
        self.mutate(id, requester, TaskOperation::Complete, |task| {
            Ok(task.complete(clock))
        })
        .await
    }

    /// Reopens a completed task owned by `requester`.
    ///
    /// Reopening an open task succeeds without a write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`],
    /// [`TaskLifecycleError::AccessDenied`], or
    /// [`TaskLifecycleError::Failed`].
    #[instrument(skip_all, fields(task_id = %id, requester = %requester))]
    pub async fn reopen(&self, id: TaskId, requester: UserId) -> TaskLifecycleResult<Task> {
        self.mutate(id, requester, TaskOperation::Reopen, |task| Ok(task.reopen()))
            .await
    }

    /// Returns every task owned by `owner_id`. No tasks is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Failed`] when the lookup fails.
    #[instrument(skip_all, fields(owner_id = %owner_id))]
    pub async fn find_by_owner(&self, owner_id: UserId) -> TaskLifecycleResult<Vec<Task>> {
        self.repository
            .find_by_owner(owner_id)
            .await
            .map_err(|err| failed(TaskOperation::FindByOwner, err))
    }

    /// Returns a single task owned by `requester`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`],
    /// [`TaskLifecycleError::AccessDenied`], or
    /// [`TaskLifecycleError::Failed`].
    pub async fn find_by_id(&self, id: TaskId, requester: UserId) -> TaskLifecycleResult<Task> {
        self.load_owned(id, requester, TaskOperation::FindById).await
    }

    /// Deletes a task owned by `requester`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`],
    /// [`TaskLifecycleError::AccessDenied`], or
    /// [`TaskLifecycleError::Failed`].
    #[instrument(skip_all, fields(task_id = %id, requester = %requester))]
    pub async fn delete(&self, id: TaskId, requester: UserId) -> TaskLifecycleResult<()> {
        let operation = TaskOperation::Delete;
        self.load_owned(id, requester, operation).await?;

        match self.repository.delete(id).await {
            Ok(()) => {
                info!("task deleted");
                Ok(())
            }
            Err(TaskRepositoryError::NotFound(missing)) => {
                Err(TaskLifecycleError::NotFound(missing))
            }
            Err(err) => Err(failed(operation, err)),
        }
    }

    /// Loads, authorizes, mutates, and persists a task.
    ///
    /// `apply` reports whether the task changed; unchanged tasks are not
    /// written back.
    async fn mutate<F>(
        &self,
        id: TaskId,
        requester: UserId,
        operation: TaskOperation,
        apply: F,
    ) -> TaskLifecycleResult<Task>
    where
        F: FnOnce(&mut Task) -> Result<bool, TaskDomainError> + Send,
    {
        let mut task = self.load_owned(id, requester, operation).await?;
        if !apply(&mut task)? {
            return Ok(task);
        }

        match self.repository.update(&task).await {
            Ok(()) => {
                info!(%operation, "task updated");
                Ok(task)
            }
            // The row disappeared between lookup and update.
            Err(TaskRepositoryError::NotFound(missing)) => {
                Err(TaskLifecycleError::NotFound(missing))
            }
            Err(err) => Err(failed(operation, err)),
        }
    }

    async fn load_owned(
        &self,
        id: TaskId,
        requester: UserId,
        operation: TaskOperation,
    ) -> TaskLifecycleResult<Task> {
        let task = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|err| failed(operation, err))?
            .ok_or(TaskLifecycleError::NotFound(id))?;

        if !task.is_owned_by(requester) {
            warn!(%operation, task_id = %id, requester = %requester, "task access denied");
            return Err(TaskLifecycleError::AccessDenied {
                task_id: id,
                requester,
            });
        }
        Ok(task)
    }
}

fn failed(operation: TaskOperation, cause: impl Into<BoxError>) -> TaskLifecycleError {
    let source = cause.into();
    error!(%operation, error = %source, "task operation failed");
    TaskLifecycleError::Failed { operation, source }
}
