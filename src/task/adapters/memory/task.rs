//! In-memory repository for task management tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::{adapters::memory::InMemoryUserRepository, domain::UserId};

/// Thread-safe in-memory task repository.
///
/// Without an owner registry any owner identifier is accepted. With one,
/// storing a task for an unknown user fails the way a foreign key would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
    owners: Option<InMemoryUserRepository>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository that checks owners against `users`.
    #[must_use]
    pub fn with_known_owners(users: InMemoryUserRepository) -> Self {
        Self {
            state: Arc::default(),
            owners: Some(users),
        }
    }

    fn ensure_owner_exists(&self, owner_id: UserId) -> TaskRepositoryResult<()> {
        let Some(users) = &self.owners else {
            return Ok(());
        };
        if users
            .contains(owner_id)
            .map_err(TaskRepositoryError::persistence)?
        {
            Ok(())
        } else {
            Err(TaskRepositoryError::OwnerNotFound(owner_id))
        }
    }
}

fn lock_error<T>(err: &PoisonError<T>) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.ensure_owner_exists(task.owner_id())?;

        let mut tasks = self.state.write().map_err(|err| lock_error(&err))?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(tasks.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.state.read().map_err(|err| lock_error(&err))?;
        let mut owned: Vec<Task> = tasks
            .values()
            .filter(|task| task.is_owned_by(owner_id))
            .cloned()
            .collect();
        owned.sort_by(|left, right| left.title().as_str().cmp(right.title().as_str()));
        Ok(owned)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(|err| lock_error(&err))?;
        let stored = tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *stored = task.clone();
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(|err| lock_error(&err))?;
        tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
