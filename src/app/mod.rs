//! Main application modules.
//!
//! This module provides the I/O around the checker: reading input lists,
//! persisting results (with overwrite confirmation), and final statistics.

pub mod input;
pub mod output;
pub mod statistics;

// Re-export public API
pub use input::{load_pool, read_domains, read_domains_from};
pub use output::{confirm_overwrite, persist_domains, write_domains};
pub use statistics::log_final_statistics;
