//! DNS server selection.

use std::fmt;
use std::net::IpAddr;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::DnsServerPool;
use crate::error_handling::CheckError;

/// Where the server for a lookup came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerSource {
    /// The fixed server from the configuration.
    Override,
    /// A fresh random draw from the pool.
    Pool,
}

/// The server chosen for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedServer {
    /// Address to query.
    pub address: IpAddr,
    /// Override or pool draw.
    pub source: ServerSource,
}

impl fmt::Display for SelectedServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            ServerSource::Override => write!(f, "{}", self.address),
            ServerSource::Pool => write!(f, "{} (random pick)", self.address),
        }
    }
}

/// Chooses the DNS server for the next domain.
///
/// The override, when present, wins every time. Otherwise an entry is drawn
/// uniformly from `pool`; call this once per domain so every domain gets its
/// own draw. The drawn entry must parse as an IPv4 or IPv6 address.
///
/// # Errors
///
/// - `CheckError::PoolCorruption` if the drawn entry is not an IP address
/// - `CheckError::EmptyPool` if there is no override and nothing to draw
pub fn choose_server<R: Rng + ?Sized>(
    pool: &DnsServerPool,
    server_override: Option<IpAddr>,
    rng: &mut R,
) -> Result<SelectedServer, CheckError> {
    if let Some(address) = server_override {
        return Ok(SelectedServer {
            address,
            source: ServerSource::Override,
        });
    }

    let drawn = pool.servers().choose(rng).ok_or(CheckError::EmptyPool)?;
    let address = drawn
        .parse::<IpAddr>()
        .map_err(|_| CheckError::PoolCorruption {
            server: drawn.clone(),
        })?;

    Ok(SelectedServer {
        address,
        source: ServerSource::Pool,
    })
}
