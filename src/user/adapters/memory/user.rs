//! In-memory repository for user account tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::user::{
    domain::{Email, User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
///
/// Deleting a user does not cascade: an
/// [`InMemoryTaskRepository`](crate::task::adapters::memory::InMemoryTaskRepository)
/// sharing this store as its owner registry keeps the deleted user's tasks,
/// whereas the `PostgreSQL` schema removes them with the user row.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<UserId, User>,
    email_index: HashMap<Email, UserId>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when a user with the identifier is stored.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when the lock is poisoned.
    pub fn contains(&self, id: UserId) -> UserRepositoryResult<bool> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.users.contains_key(&id))
    }
}

fn lock_error<T>(err: &PoisonError<T>) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        if state.users.contains_key(&user.id()) {
            return Err(UserRepositoryError::DuplicateUser(user.id()));
        }
        if state.email_index.contains_key(user.email()) {
            return Err(UserRepositoryError::DuplicateEmail(user.email().clone()));
        }

        state.email_index.insert(user.email().clone(), user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        let user = state
            .email_index
            .get(email)
            .and_then(|id| state.users.get(id))
            .cloned();
        Ok(user)
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;

        let old_email = state
            .users
            .get(&user.id())
            .ok_or(UserRepositoryError::NotFound(user.id()))?
            .email()
            .clone();

        if old_email != *user.email() {
            let taken = state
                .email_index
                .get(user.email())
                .is_some_and(|owner| *owner != user.id());
            if taken {
                return Err(UserRepositoryError::DuplicateEmail(user.email().clone()));
            }
            state.email_index.remove(&old_email);
            state.email_index.insert(user.email().clone(), user.id());
        }

        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let removed = state
            .users
            .remove(&id)
            .ok_or(UserRepositoryError::NotFound(id))?;
        state.email_index.remove(removed.email());
        Ok(())
    }
}
