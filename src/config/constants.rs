//! Configuration constants.
//!
//! This module defines the operational parameters used throughout the checker:
//! query timeouts, pacing ranges, log limits and the default resolver pool.

/// DNS query timeout in seconds.
///
/// Applied both as the per-attempt timeout and as the overall budget for a
/// single A lookup (the resolver is configured for one attempt).
pub const DNS_TIMEOUT_SECS: u64 = 10;

/// Standard DNS port used when binding the resolver to a chosen server.
pub const DNS_PORT: u16 = 53;

/// Maximum length of a log message in characters after sanitization.
///
/// Domain strings come from untrusted input files, so anything interpolated
/// into a log line is cut down to this size.
pub const MAX_LOG_MESSAGE_LENGTH: usize = 512;

/// Maximum length of a domain as it is echoed in log lines.
pub const MAX_LOGGED_DOMAIN_LENGTH: usize = 253;

// Pacing ranges (inclusive, seconds) for each wait level
pub const WAIT_LEVEL_1_SECS: (u64, u64) = (2, 4);
pub const WAIT_LEVEL_2_SECS: (u64, u64) = (4, 6);
pub const WAIT_LEVEL_3_SECS: (u64, u64) = (6, 10);

/// Public resolvers used when no `--dns` override is given.
///
/// Google, Cloudflare, Quad9, OpenDNS and AdGuard. A server is drawn at random
/// from this list for every domain.
pub const DEFAULT_DNS_SERVERS: &[&str] = &[
    "8.8.8.8",
    "8.8.4.4",
    "1.1.1.1",
    "1.0.0.1",
    "9.9.9.9",
    "149.112.112.112",
    "208.67.222.222",
    "208.67.220.220",
    "94.140.14.14",
    "94.140.15.15",
];
