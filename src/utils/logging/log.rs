//! Logging utilities
//!
//! This module provides standardized logging functions for layout operations.

use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `family_id` - Family being operated on
pub fn log_operation_start(operation: &str, family_id: &str) {
    log::debug!("{operation} family {family_id}");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `family_id` - Family that was operated on
/// * `items` - Number of items produced
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    family_id: &str,
    items: usize,
    elapsed: Option<Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully {} {} items for family {} in {:?}",
            operation,
            items,
            family_id,
            duration
        );
    } else {
        log::info!(
            "Successfully {} {} items for family {}",
            operation,
            items,
            family_id
        );
    }
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `family_id` - Optional family related to the warning
pub fn log_warning(message: &str, family_id: Option<&str>) {
    if let Some(family_id) = family_id {
        log::warn!("{message}: family {family_id}");
    } else {
        log::warn!("{message}");
    }
}
