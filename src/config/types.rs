//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and the library-level checker configuration.

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use rand::Rng;

use crate::config::constants::{
    DNS_TIMEOUT_SECS, WAIT_LEVEL_1_SECS, WAIT_LEVEL_2_SECS, WAIT_LEVEL_3_SECS,
};
use crate::config::pool::DnsServerPool;
use crate::error_handling::CheckError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Pacing tier applied between domain checks.
///
/// Each level selects an inclusive range of whole seconds; the actual wait is
/// drawn uniformly from that range before every lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WaitLevel {
    /// Wait 2 to 4 seconds
    #[value(name = "1")]
    Short,
    /// Wait 4 to 6 seconds
    #[value(name = "2")]
    Medium,
    /// Wait 6 to 10 seconds
    #[value(name = "3")]
    Long,
}

impl WaitLevel {
    /// Inclusive `(min, max)` wait in seconds for this level.
    pub fn range_secs(self) -> (u64, u64) {
        match self {
            WaitLevel::Short => WAIT_LEVEL_1_SECS,
            WaitLevel::Medium => WAIT_LEVEL_2_SECS,
            WaitLevel::Long => WAIT_LEVEL_3_SECS,
        }
    }

    /// Draws a wait duration uniformly from this level's range.
    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> Duration {
        let (min, max) = self.range_secs();
        Duration::from_secs(rng.random_range(min..=max))
    }
}

/// Checker configuration (no CLI dependencies).
///
/// Built once before a run and handed to [`crate::Checker`] by value; the
/// checker never mutates it.
///
/// # Examples
///
/// ```
/// use dns_checker::{CheckConfig, WaitLevel};
///
/// let config = CheckConfig {
///     server: Some("1.1.1.1".parse().unwrap()),
///     wait_level: Some(WaitLevel::Short),
///     ..Default::default()
/// };
/// assert_eq!(config.timeout.as_secs(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Fixed DNS server used for every domain. When `None`, a server is drawn
    /// from `pool` for each domain.
    pub server: Option<IpAddr>,

    /// Optional pacing tier.
    pub wait_level: Option<WaitLevel>,

    /// Per-query timeout.
    pub timeout: Duration,

    /// Resolver pool used when no fixed server is set.
    pub pool: DnsServerPool,

    /// Seed for server draws and pacing. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl CheckConfig {
    /// Rejects settings that would make every lookup fail.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::ZeroTimeout` if `timeout` is zero.
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.timeout.is_zero() {
            return Err(CheckError::ZeroTimeout);
        }
        Ok(())
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            server: None,
            wait_level: None,
            timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            pool: DnsServerPool::default(),
            seed: None,
        }
    }
}

/// Command-line options.
///
/// Every option can also be supplied through a `DNS_CHECKER_*` environment
/// variable (or a `.env` file next to the binary).
///
/// # Examples
///
/// ```bash
/// # Random public resolver per domain, no pacing
/// dns_checker --input domains.txt --alive alive.txt --dead dead.txt
///
/// # Fixed resolver with 4-6 second pauses between lookups
/// dns_checker --input domains.txt --alive alive.txt --dead dead.txt --dns 9.9.9.9 --wait 2
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dns_checker",
    version,
    about = "Check if domains are resolvable by a specified DNS server."
)]
pub struct Opt {
    /// Path to the input file containing domains, one per line (`-` for stdin)
    #[arg(long, env = "DNS_CHECKER_INPUT")]
    pub input: PathBuf,

    /// Path to the output file for alive domains
    #[arg(long, env = "DNS_CHECKER_ALIVE")]
    pub alive: PathBuf,

    /// Path to the output file for dead domains
    #[arg(long, env = "DNS_CHECKER_DEAD")]
    pub dead: PathBuf,

    /// IP address of the DNS server to use for every check.
    ///
    /// When omitted, a public resolver is picked at random for each domain.
    #[arg(long, env = "DNS_CHECKER_DNS")]
    pub dns: Option<IpAddr>,

    /// Pause between checks: 1 = 2-4s, 2 = 4-6s, 3 = 6-10s
    #[arg(long, value_enum, env = "DNS_CHECKER_WAIT")]
    pub wait: Option<WaitLevel>,

    /// File with resolver addresses to draw from instead of the built-in pool
    #[arg(long, env = "DNS_CHECKER_DNS_POOL")]
    pub dns_pool: Option<PathBuf>,

    /// Seed for resolver selection and pacing (reproducible runs)
    #[arg(long, env = "DNS_CHECKER_SEED")]
    pub seed: Option<u64>,

    /// Per-query timeout in seconds
    #[arg(
        long,
        default_value_t = DNS_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        env = "DNS_CHECKER_TIMEOUT_SECONDS"
    )]
    pub timeout_seconds: u64,

    /// Overwrite existing output files without asking
    #[arg(short = 'y', long, env = "DNS_CHECKER_YES")]
    pub yes: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, env = "DNS_CHECKER_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, env = "DNS_CHECKER_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Opt {
    /// Builds the checker configuration from these options and a resolver pool.
    pub fn check_config(&self, pool: DnsServerPool) -> CheckConfig {
        CheckConfig {
            server: self.dns,
            wait_level: self.wait,
            timeout: Duration::from_secs(self.timeout_seconds),
            pool,
            seed: self.seed,
        }
    }
}
