//! Domain model for user accounts.
//!
//! Value objects validate on construction, so a [`User`] can only ever hold
//! valid names, addresses, and password hashes. Password hashing and
//! verification happen nowhere else.

mod email;
mod error;
mod ids;
mod password;
mod user;
mod username;

pub use email::Email;
pub use error::UserDomainError;
pub use ids::UserId;
pub use password::Password;
pub use user::{PersistedUserData, User};
pub use username::Username;
