//! Port contracts for user account management.
//!
//! Ports define infrastructure-agnostic interfaces used by user services.

pub mod repository;
pub mod token;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
pub use token::{TokenProvider, TokenProviderError};

#[cfg(test)]
pub use repository::MockUserRepository;
#[cfg(test)]
pub use token::MockTokenProvider;
