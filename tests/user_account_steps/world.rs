//! Shared world state for user account BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use mockable::DefaultClock;
use rstest::fixture;
use taskery::user::{
    adapters::{jwt::JwtTokenProvider, memory::InMemoryUserRepository},
    domain::User,
    services::{UserAccountError, UserAccountService},
};

/// Token provider used by the BDD world.
pub type TestTokens = JwtTokenProvider<DefaultClock>;

/// Service type used by the BDD world.
pub type TestUserService = UserAccountService<InMemoryUserRepository, TestTokens>;

/// Scenario world for user account behaviour tests.
pub struct UserAccountWorld {
    pub service: TestUserService,
    pub tokens: Arc<TestTokens>,
    pub registered: HashMap<String, User>,
    pub last_registration: Option<Result<User, UserAccountError>>,
    pub last_login: Option<Result<String, UserAccountError>>,
}

impl UserAccountWorld {
    /// Creates a world with an empty user store.
    #[must_use]
    pub fn new() -> Self {
        let tokens = Arc::new(JwtTokenProvider::new(
            b"bdd-secret",
            Duration::minutes(5),
            "taskery-bdd",
            Arc::new(DefaultClock),
        ));
        let service = UserAccountService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::clone(&tokens),
        );
        Self {
            service,
            tokens,
            registered: HashMap::new(),
            last_registration: None,
            last_login: None,
        }
    }
}

impl Default for UserAccountWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> UserAccountWorld {
    UserAccountWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
