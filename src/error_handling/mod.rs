//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, run-level, per-lookup)
//! - Categorization of resolver errors into lookup failure classes
//!
//! Per-lookup failures are split into:
//! - **Authoritative negatives**: the domain is dead
//! - **Transient failures**: timeouts and everything unexpected, reported but
//!   never written to either output list

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_resolve_error;
pub use types::{CheckError, InitializationError, ResolutionFailure};
