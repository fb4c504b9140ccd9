//! Personal task management.
//!
//! Tasks are owned by a single user, carry an optional deadline, and move
//! between open and completed states. Every mutation goes through an
//! ownership check in the service layer. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
