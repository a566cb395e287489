//! Test utilities
//!
//! Fixtures and helpers shared by unit tests and the integration suite.

pub mod helpers;

// Re-export commonly used functions for convenience
pub use fixtures::{
    disconnected_family, nuclear_family, polygamous_family, single_parent_family,
    three_generation_family,
};
pub use helpers::{forbidden_overlaps, init_test_logging, missing_required_overlaps};
