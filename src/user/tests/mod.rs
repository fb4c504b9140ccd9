//! Unit tests for the user account module.
