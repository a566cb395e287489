//! Shared utilities: logging helpers and test fixtures

pub mod logging;
pub mod test;
