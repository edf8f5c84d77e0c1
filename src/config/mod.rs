//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, pacing ranges, limits)
//! - The resolver pool type
//! - CLI option types and the library-level `CheckConfig`

mod constants;
mod pool;
mod types;

// Re-export all constants
pub use constants::*;
pub use pool::DnsServerPool;
pub use types::{CheckConfig, LogFormat, LogLevel, Opt, WaitLevel};
