//! Shared world state for task ownership BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use taskery::{
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::Task,
        services::{TaskLifecycleError, TaskLifecycleService},
    },
    user::{adapters::memory::InMemoryUserRepository, domain::User},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task ownership behaviour tests.
pub struct TaskOwnershipWorld {
    pub users: InMemoryUserRepository,
    pub service: TestTaskService,
    pub known_users: HashMap<String, User>,
    pub last_created_task: Option<Task>,
    pub first_completed_at: Option<DateTime<Utc>>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskOwnershipWorld {
    /// Creates a world whose task store only accepts registered owners.
    #[must_use]
    pub fn new() -> Self {
        let users = InMemoryUserRepository::new();
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::with_known_owners(users.clone())),
            Arc::new(DefaultClock),
        );
        Self {
            users,
            service,
            known_users: HashMap::new(),
            last_created_task: None,
            first_completed_at: None,
            last_result: None,
        }
    }

    /// Looks up a user registered earlier in the scenario.
    pub fn user(&self, name: &str) -> Result<&User, eyre::Report> {
        self.known_users
            .get(name)
            .ok_or_else(|| eyre::eyre!("user '{name}' was not registered in this scenario"))
    }

    /// Returns the task created earlier in the scenario.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.last_created_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
    }
}

impl Default for TaskOwnershipWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskOwnershipWorld {
    TaskOwnershipWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
