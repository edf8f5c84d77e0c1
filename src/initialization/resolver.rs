//! DNS resolver initialization.
//!
//! This module builds resolvers bound to exactly one nameserver, with the
//! query timeout and single-attempt policy the checker relies on.

use std::net::IpAddr;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_PORT;
use crate::error_handling::InitializationError;

/// Initializes a DNS resolver that only talks to `server`.
///
/// The resolver is configured so that one lookup is one question to one
/// server:
/// - a single attempt bounded by `timeout`
/// - no caching, no hosts file, no search domains (`ndots = 0`)
/// - negative responses are trusted, so NXDOMAIN is reported as such
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if `timeout` is zero.
pub fn init_resolver(
    server: IpAddr,
    timeout: Duration,
) -> Result<TokioAsyncResolver, InitializationError> {
    if timeout.is_zero() {
        return Err(InitializationError::DnsResolverError(
            "query timeout must be greater than zero".to_string(),
        ));
    }

    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 1;
    opts.ndots = 0;
    opts.cache_size = 0;
    opts.use_hosts_file = false;

    let name_servers = NameServerConfigGroup::from_ips_clear(&[server], DNS_PORT, true);
    let config = ResolverConfig::from_parts(None, Vec::new(), name_servers);

    log::debug!("Built resolver bound to {server} (timeout {timeout:?})");
    Ok(TokioAsyncResolver::tokio(config, opts))
}
