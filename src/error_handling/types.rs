//! Error type definitions.
//!
//! This module defines the library's error enums: setup failures, run-level
//! failures, and the resolver boundary's failure classes.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error building a DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Failures that stop an entire checking run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// A server drawn from the pool is not an IP address.
    #[error("DNS server pool is corrupted: {server:?} is not a valid IP address")]
    PoolCorruption {
        /// The offending pool entry.
        server: String,
    },

    /// No override was given and the pool has nothing to draw from.
    #[error("DNS server pool is empty and no --dns server was given")]
    EmptyPool,

    /// The per-query timeout is zero, so no lookup could ever complete.
    #[error("DNS query timeout must be greater than zero")]
    ZeroTimeout,
}

/// Outcome classes of a single failed A lookup.
///
/// Every resolver error is mapped into one of these at the DNS boundary (see
/// `categorize_resolve_error`), so the checker never inspects resolver types.
#[derive(Error, Debug, Clone, PartialEq, Eq, EnumIterMacro)]
pub enum ResolutionFailure {
    /// The query exceeded its time budget.
    #[error("query timed out")]
    Timeout,

    /// NXDOMAIN: the name does not exist.
    #[error("name does not exist (NXDOMAIN)")]
    NoSuchName,

    /// The name exists but has no A record.
    #[error("no A record for name")]
    NoAnswer,

    /// No nameserver could give an answer (SERVFAIL, REFUSED, nothing reachable).
    #[error("no nameserver could answer: {0}")]
    NoNameservers(String),

    /// The resolution layer refused the name itself.
    #[error("malformed domain name: {0}")]
    MalformedName(String),

    /// Anything else (I/O, protocol, unexpected resolver state).
    #[error("resolution failed: {0}")]
    Other(String),
}

impl ResolutionFailure {
    /// Whether the failure is an authoritative statement that the domain is dead.
    pub fn is_authoritative_negative(&self) -> bool {
        matches!(
            self,
            ResolutionFailure::NoSuchName
                | ResolutionFailure::NoAnswer
                | ResolutionFailure::NoNameservers(_)
        )
    }

    /// Short stable label used in log lines and statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionFailure::Timeout => "timeout",
            ResolutionFailure::NoSuchName => "nxdomain",
            ResolutionFailure::NoAnswer => "no answer",
            ResolutionFailure::NoNameservers(_) => "no nameservers",
            ResolutionFailure::MalformedName(_) => "malformed name",
            ResolutionFailure::Other(_) => "other",
        }
    }
}
