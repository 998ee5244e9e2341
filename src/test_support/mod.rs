//! Test utilities for vercat unit tests.
//!
//! Provides a realistic catalog document and helpers that build it, so
//! module tests do not each carry their own TOML.

pub mod fixtures;

// Re-export fixtures for convenience
pub use fixtures::*;
