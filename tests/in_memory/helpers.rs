//! Shared fixtures for in-memory integration tests.

use chrono::Duration;
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use taskery::{
    task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService},
    user::{
        adapters::{jwt::JwtTokenProvider, memory::InMemoryUserRepository},
        domain::User,
        services::{RegisterUserRequest, UserAccountService},
    },
};

/// Password used by every registered test user.
pub const PASSWORD: &str = "longenough1";

/// Token provider type used by the harness.
pub type Tokens = JwtTokenProvider<DefaultClock>;

/// User service over the in-memory repository.
pub type Users = UserAccountService<InMemoryUserRepository, Tokens>;

/// Task service over the in-memory repository.
pub type Tasks = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// User and task services sharing one user store.
pub struct Harness {
    /// User account service.
    pub users: Users,
    /// Task lifecycle service that only accepts registered owners.
    pub tasks: Tasks,
    /// Token provider shared with `users`.
    pub tokens: Arc<Tokens>,
}

/// Builds a fresh harness for each test.
#[fixture]
pub fn harness() -> Harness {
    let clock = Arc::new(DefaultClock);
    let user_store = InMemoryUserRepository::new();
    let tokens = Arc::new(JwtTokenProvider::new(
        b"integration-secret",
        Duration::minutes(10),
        "taskery-tests",
        Arc::clone(&clock),
    ));

    Harness {
        users: UserAccountService::new(Arc::new(user_store.clone()), Arc::clone(&tokens)),
        tasks: TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::with_known_owners(user_store)),
            clock,
        ),
        tokens,
    }
}

/// Registers a user named `username` at `<username>@example.com`.
///
/// # Errors
///
/// Returns the service error when registration fails.
pub async fn register(harness: &Harness, username: &str) -> eyre::Result<User> {
    let user = harness
        .users
        .register(RegisterUserRequest::new(
            username,
            format!("{username}@example.com"),
            PASSWORD,
        ))
        .await?;
    Ok(user)
}
