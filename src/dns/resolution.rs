//! A-record resolution against a chosen server.
//!
//! This module defines the resolver seam the checker depends on and its
//! production implementation on top of `hickory-resolver`.

use std::collections::HashMap;
use std::future::Future;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::error::ResolveError;
use hickory_resolver::proto::rr::Name;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::{categorize_resolve_error, ResolutionFailure};
use crate::initialization::init_resolver;

/// Performs a single A lookup for a name against a specific server.
///
/// Implementations must not retry and must report every failure through
/// [`ResolutionFailure`]; classification into verdicts happens in the checker.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Looks up the A records of `domain` by asking `server`, bounded by `timeout`.
    ///
    /// Returns the addresses found (never empty on `Ok`).
    async fn lookup_a(
        &self,
        domain: &str,
        server: IpAddr,
        timeout: Duration,
    ) -> Result<Vec<Ipv4Addr>, ResolutionFailure>;
}

/// [`AddressResolver`] backed by `hickory-resolver`.
///
/// Keeps one resolver per `(server, timeout)` so repeated draws of the same
/// public resolver reuse its connections. Each cached resolver is bound to
/// exactly one nameserver, so there is no shared "current server" to rebind.
#[derive(Default)]
pub struct HickoryResolver {
    pub(super) resolvers: Mutex<HashMap<(IpAddr, Duration), TokioAsyncResolver>>,
}

impl HickoryResolver {
    /// Creates a resolver with an empty per-server cache.
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn resolver_for(
        &self,
        server: IpAddr,
        timeout: Duration,
    ) -> Result<TokioAsyncResolver, ResolutionFailure> {
        let mut resolvers = self
            .resolvers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(resolver) = resolvers.get(&(server, timeout)) {
            return Ok(resolver.clone());
        }
        let resolver = init_resolver(server, timeout)
            .map_err(|e| ResolutionFailure::Other(e.to_string()))?;
        resolvers.insert((server, timeout), resolver.clone());
        Ok(resolver)
    }
}

/// Parses `domain` into an absolute DNS name.
///
/// This is where names that slipped past validation but are still unusable on
/// the wire (empty or over-long labels) are rejected.
pub fn parse_query_name(domain: &str) -> Result<Name, ResolutionFailure> {
    let relative = domain.strip_suffix('.').unwrap_or(domain);
    if relative.is_empty() || relative.split('.').any(str::is_empty) {
        return Err(ResolutionFailure::MalformedName(format!(
            "empty label in {domain:?}"
        )));
    }
    let mut name = Name::from_ascii(domain)
        .map_err(|e| ResolutionFailure::MalformedName(e.to_string()))?;
    name.set_fqdn(true);
    Ok(name)
}

/// Runs a resolver future under an overall deadline.
///
/// The resolver enforces the per-attempt timeout; this bounds the whole
/// lookup including any UDP-to-TCP fallback.
pub(super) async fn within_deadline<F, T>(
    timeout: Duration,
    lookup: F,
) -> Result<T, ResolutionFailure>
where
    F: Future<Output = Result<T, ResolveError>>,
{
    tokio::time::timeout(timeout, lookup)
        .await
        .map_err(|_| ResolutionFailure::Timeout)?
        .map_err(|e| categorize_resolve_error(&e))
}

#[async_trait]
impl AddressResolver for HickoryResolver {
    async fn lookup_a(
        &self,
        domain: &str,
        server: IpAddr,
        timeout: Duration,
    ) -> Result<Vec<Ipv4Addr>, ResolutionFailure> {
        let name = parse_query_name(domain)?;
        let resolver = self.resolver_for(server, timeout)?;

        let lookup = within_deadline(timeout, resolver.ipv4_lookup(name)).await?;

        let addresses: Vec<Ipv4Addr> = lookup.iter().map(|a| a.0).collect();
        if addresses.is_empty() {
            return Err(ResolutionFailure::NoAnswer);
        }
        Ok(addresses)
    }
}
