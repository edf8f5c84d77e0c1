//! DNS resolution.
//!
//! This module provides the A-record lookup used to decide whether a domain
//! is alive, built on `hickory-resolver`:
//! - `AddressResolver` - the seam the checker is generic over
//! - `HickoryResolver` - production implementation, one resolver per server
//!
//! Lookups go to the server chosen by the checker, never to the system
//! resolver configuration.

mod resolution;

// Re-export public API
pub use resolution::{parse_query_name, AddressResolver, HickoryResolver};
