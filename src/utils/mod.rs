//! Utility functions.
//!
//! This module provides:
//! - Log message sanitization (control characters, length limits)
//! - Percentage formatting for progress reports

pub mod sanitize;

pub use sanitize::{sanitize_and_truncate, sanitize_for_log, sanitize_log_message};

/// Percentage of `done` over `total`, rounded to two decimals.
///
/// Only used for reporting. Returns 100.0 for an empty total.
pub fn percent_complete(done: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    let pct = 100.0 * done as f64 / total as f64;
    (pct * 100.0).round() / 100.0
}
