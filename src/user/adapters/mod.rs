//! Adapter implementations for user account ports.

pub mod jwt;
pub mod memory;
pub mod postgres;
