//! Application services for user account orchestration.

mod account;

pub use account::{
    LoginRequest, RegisterUserRequest, UserAccountError, UserAccountErrorKind,
    UserAccountResult, UserAccountService, UserOperation,
};
