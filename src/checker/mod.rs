//! Domain resolution checker.
//!
//! The checker walks the input in order and, for every line:
//! 1. rejects it as `Invalid` if it does not look like a domain (no network)
//! 2. sleeps for a random interval if a wait level is configured
//! 3. chooses a DNS server (fixed override or a fresh draw from the pool)
//! 4. asks that server for the A record, once, within the timeout
//! 5. classifies the outcome and folds it into the running summary
//!
//! Processing is strictly sequential. A zero query timeout refuses to start,
//! and a corrupted resolver pool stops the whole run and empties both output
//! lists; every other failure only affects the domain it happened on.

mod result;
mod selector;

use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{CheckConfig, MAX_LOGGED_DOMAIN_LENGTH};
use crate::dns::AddressResolver;
use crate::domain::validate_domain;
use crate::error_handling::CheckError;
use crate::utils::{percent_complete, sanitize_and_truncate, sanitize_for_log};

pub use result::{classify, CheckResult, CheckSummary, Verdict};
pub use selector::{choose_server, SelectedServer, ServerSource};

/// Sequential domain checker.
///
/// Generic over the resolver so tests can substitute deterministic answers.
pub struct Checker<R: AddressResolver> {
    resolver: R,
    config: CheckConfig,
    rng: StdRng,
}

impl<R: AddressResolver> Checker<R> {
    /// Creates a checker. The RNG is seeded from `config.seed` when present.
    pub fn new(resolver: R, config: CheckConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            resolver,
            config,
            rng,
        }
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Checks a single domain.
    ///
    /// # Errors
    ///
    /// Returns `CheckError` when the configuration is unusable or no usable
    /// server can be chosen. All lookup failures are reported inside the
    /// `CheckResult` instead.
    pub async fn check_domain(&mut self, domain: &str) -> Result<CheckResult, CheckError> {
        self.config.validate()?;
        let shown = logged_domain(domain);

        if !validate_domain(domain) {
            warn!("Skipping invalid domain: {shown}");
            return Ok(CheckResult::invalid(domain));
        }

        if let Some(level) = self.config.wait_level {
            let wait = level.draw(&mut self.rng);
            info!("Waiting {}s before checking {shown}", wait.as_secs());
            tokio::time::sleep(wait).await;
        }

        let server = choose_server(&self.config.pool, self.config.server, &mut self.rng)?;
        debug!("Using DNS server {server} for {shown}");

        let outcome = self
            .resolver
            .lookup_a(domain, server.address, self.config.timeout)
            .await;
        let result = classify(domain, server.address, outcome);

        match (&result.verdict, &result.failure) {
            (Verdict::Alive, _) => info!("Domain {shown} is alive."),
            (Verdict::Dead, Some(failure)) => {
                info!("Domain {shown} is dead ({}).", failure.as_str())
            }
            (Verdict::Dead, None) => info!("Domain {shown} is dead."),
            (verdict, failure) => warn!(
                "Domain {shown} not classified ({verdict}): {}",
                failure
                    .as_ref()
                    .map(|f| sanitize_for_log(&f.to_string()))
                    .unwrap_or_default()
            ),
        }

        Ok(result)
    }

    /// Checks every domain in order and returns the summary.
    ///
    /// An unusable configuration aborts before the first domain. On any other
    /// `CheckError` (pool corruption or an empty pool) the remaining domains
    /// are skipped and the summary comes back with empty lists and
    /// `aborted` set.
    pub async fn run<S: AsRef<str>>(&mut self, domains: &[S]) -> CheckSummary {
        let mut summary = CheckSummary::new(domains.len());
        if let Err(e) = self.config.validate() {
            error!("Refusing to start: {e}");
            summary.abort(e);
            return summary;
        }
        info!("Checking {} domains ...", domains.len());

        for domain in domains {
            let domain = domain.as_ref();
            info!("Reading domain: {}", logged_domain(domain));

            match self.check_domain(domain).await {
                Ok(result) => summary.record(&result),
                Err(e) => {
                    error!(
                        "Aborting run after {} of {} domains: {}",
                        summary.checked,
                        summary.total,
                        sanitize_for_log(&e.to_string())
                    );
                    summary.abort(e);
                    return summary;
                }
            }

            info!(
                "Progress: {}/{} ({:.2}%)",
                summary.checked,
                summary.total,
                percent_complete(summary.checked, summary.total)
            );
        }

        summary
    }
}

fn logged_domain(domain: &str) -> String {
    sanitize_and_truncate(domain, MAX_LOGGED_DOMAIN_LENGTH)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
