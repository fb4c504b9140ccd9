//! Step definitions for task ownership scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
