//! Step definitions for user account scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
