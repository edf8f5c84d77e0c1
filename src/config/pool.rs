//! Public resolver pool.
//!
//! The pool is plain strings on purpose: it can be swapped for a user-supplied
//! file, so entries are only trusted after they parse as IP addresses.

use std::net::IpAddr;

use crate::config::constants::DEFAULT_DNS_SERVERS;
use crate::error_handling::CheckError;

/// Ordered set of resolver addresses servers are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsServerPool {
    servers: Vec<String>,
}

impl DnsServerPool {
    /// Creates a pool from arbitrary entries. Entries are not validated here.
    pub fn new<I, S>(servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            servers: servers.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a pool file: one address per line, blank lines and `#` comments skipped.
    pub fn parse(contents: &str) -> Self {
        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Pool entries in order.
    pub fn servers(&self) -> &[String] {
        &self.servers
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    /// Whether the pool has no entries.
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Checks every entry up front.
    ///
    /// The checker itself only validates the entry it draws, so a corrupted
    /// pool is otherwise discovered mid-run. Callers can use this to warn early.
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.servers.is_empty() {
            return Err(CheckError::EmptyPool);
        }
        match self
            .servers
            .iter()
            .find(|server| server.parse::<IpAddr>().is_err())
        {
            Some(bad) => Err(CheckError::PoolCorruption {
                server: bad.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for DnsServerPool {
    fn default() -> Self {
        Self::new(DEFAULT_DNS_SERVERS.iter().copied())
    }
}
