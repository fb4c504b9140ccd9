//! In-memory adapters for user account management.

mod user;

pub use user::InMemoryUserRepository;
