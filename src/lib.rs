//! dns_checker library: checks whether domains still resolve.
//!
//! Each domain is validated, then asked for its A record at a single DNS
//! server (a fixed one, or a random public resolver per domain). Domains with
//! an address are alive; domains that authoritatively do not resolve are
//! dead. Invalid input and transient failures (timeouts and the like) are
//! reported but kept out of both lists.
//!
//! # Example
//!
//! ```no_run
//! use dns_checker::{CheckConfig, Checker, HickoryResolver, WaitLevel};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = CheckConfig {
//!     wait_level: Some(WaitLevel::Short),
//!     ..Default::default()
//! };
//! let mut checker = Checker::new(HickoryResolver::new(), config);
//! let summary = checker.run(&["example.com", "does-not-exist.example"]).await;
//! println!("alive: {:?}, dead: {:?}", summary.alive, summary.dead);
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod checker;
pub mod config;
pub mod dns;
mod domain;
pub mod error_handling;
pub mod initialization;
mod utils;

// Re-export public API
pub use checker::{
    choose_server, classify, CheckResult, CheckSummary, Checker, SelectedServer, ServerSource,
    Verdict,
};
pub use config::{CheckConfig, DnsServerPool, LogFormat, LogLevel, Opt, WaitLevel};
pub use dns::{AddressResolver, HickoryResolver};
pub use domain::validate_domain;
pub use error_handling::{CheckError, InitializationError, ResolutionFailure};
pub use run::{run_check, CheckReport};
pub use utils::{sanitize_and_truncate, sanitize_for_log, sanitize_log_message};

// Internal run module (wires input, checker and output together)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::app::{log_final_statistics, load_pool, persist_domains, read_domains};
    use crate::checker::Checker;
    use crate::config::{DnsServerPool, Opt};
    use crate::dns::HickoryResolver;
    use crate::utils::sanitize_for_log;

    /// Results of a checking run.
    #[derive(Debug, Clone)]
    pub struct CheckReport {
        /// Number of input lines processed
        pub total_domains: usize,
        /// Domains that resolved
        pub alive: usize,
        /// Domains that authoritatively did not resolve
        pub dead: usize,
        /// Lines rejected as domain names
        pub invalid: usize,
        /// Domains whose lookup timed out or failed unexpectedly
        pub transient: usize,
        /// Alive list path, if it was written
        pub alive_path: Option<PathBuf>,
        /// Dead list path, if it was written
        pub dead_path: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a full check: read input, check every domain, persist both lists.
    ///
    /// Output files are only touched after the check completes. Existing files
    /// are overwritten only with `--yes` or after confirmation on stdin.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input or pool file cannot be read
    /// - The run aborts because the resolver pool is corrupted or empty
    ///   (nothing is written in that case)
    /// - An output file cannot be written
    pub async fn run_check(opt: Opt) -> Result<CheckReport> {
        let start_time = Instant::now();

        let domains = read_domains(&opt.input).await?;

        let pool = match &opt.dns_pool {
            Some(path) => load_pool(path).await?,
            None => DnsServerPool::default(),
        };
        if opt.dns.is_none() {
            if let Err(e) = pool.validate() {
                warn!(
                    "{}; the run stops if it is drawn",
                    sanitize_for_log(&e.to_string())
                );
            }
        }
        match opt.dns {
            Some(server) => info!("Using DNS server {server} for all domains"),
            None => info!(
                "Picking a random DNS server per domain from {} candidates",
                pool.len()
            ),
        }

        let config = opt.check_config(pool);
        let mut checker = Checker::new(HickoryResolver::new(), config);
        let summary = checker.run(&domains).await;

        if let Some(reason) = summary.aborted.clone() {
            log_final_statistics(&summary, start_time.elapsed().as_secs_f64());
            return Err(anyhow::Error::new(reason))
                .context("Domain check aborted; no output files were written");
        }

        let alive_path = persist_domains(&opt.alive, &summary.alive, "alive", opt.yes)
            .await
            .context("Failed to save alive domains")?;
        let dead_path = persist_domains(&opt.dead, &summary.dead, "dead", opt.yes)
            .await
            .context("Failed to save dead domains")?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        log_final_statistics(&summary, elapsed_seconds);

        Ok(CheckReport {
            total_domains: summary.checked,
            alive: summary.alive.len(),
            dead: summary.dead.len(),
            invalid: summary.invalid,
            transient: summary.transient,
            alive_path,
            dead_path,
            elapsed_seconds,
        })
    }
}
