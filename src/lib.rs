//! Taskery: task and user management core.
//!
//! Users register, log in, and manage their profile; authenticated users
//! create, edit, complete, and list their own tasks, optionally with a
//! deadline. Transport layers call the application services and map the
//! returned error kinds to their own responses.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: validated value objects and aggregates
//! - **Ports**: repository and token provider traits
//! - **Adapters**: in-memory, `PostgreSQL`, and JWT implementations
//! - **Services**: orchestration, ownership checks, and error translation
//!
//! # Modules
//!
//! - [`user`]: registration, login, and profile changes
//! - [`task`]: task creation, mutation, completion, and lookup
//! - [`error_kind`]: comparable error classification
//! - [`config`], [`telemetry`], [`app`]: process wiring

pub mod app;
pub mod config;
pub mod error_kind;
pub mod task;
pub mod telemetry;
pub mod user;
