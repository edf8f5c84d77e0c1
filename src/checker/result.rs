//! Per-domain results and the run summary they fold into.

use std::net::{IpAddr, Ipv4Addr};

use strum_macros::{Display, EnumIter};

use crate::error_handling::{CheckError, ResolutionFailure};

/// Verdict for one processed domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Verdict {
    /// At least one A record was returned.
    #[strum(serialize = "alive")]
    Alive,
    /// The name or its A record authoritatively does not exist.
    #[strum(serialize = "dead")]
    Dead,
    /// Rejected as a domain name; never written to either list.
    #[strum(serialize = "invalid")]
    Invalid,
    /// Timeout or unexpected failure; never written to either list.
    #[strum(serialize = "transient error")]
    TransientError,
}

/// Result of processing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// The original input string.
    pub domain: String,
    /// Classification of the domain.
    pub verdict: Verdict,
    /// Server that was asked, `None` if the domain never reached the network.
    pub server: Option<IpAddr>,
    /// Addresses returned for alive domains.
    pub addresses: Vec<Ipv4Addr>,
    /// The underlying lookup failure, if any.
    pub failure: Option<ResolutionFailure>,
}

impl CheckResult {
    /// A domain rejected before any network access.
    pub fn invalid(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            verdict: Verdict::Invalid,
            server: None,
            addresses: Vec::new(),
            failure: None,
        }
    }
}

/// Maps a lookup outcome to a result.
///
/// This is the only place lookup failures turn into verdicts:
/// - addresses → `Alive`
/// - NXDOMAIN, no A record, no answering nameserver → `Dead`
/// - malformed name → `Invalid`
/// - timeout and anything else → `TransientError`
pub fn classify(
    domain: &str,
    server: IpAddr,
    outcome: Result<Vec<Ipv4Addr>, ResolutionFailure>,
) -> CheckResult {
    let (verdict, addresses, failure) = match outcome {
        Ok(addresses) if !addresses.is_empty() => (Verdict::Alive, addresses, None),
        Ok(_) => (Verdict::Dead, Vec::new(), Some(ResolutionFailure::NoAnswer)),
        Err(failure) => {
            let verdict = match &failure {
                f if f.is_authoritative_negative() => Verdict::Dead,
                ResolutionFailure::MalformedName(_) => Verdict::Invalid,
                _ => Verdict::TransientError,
            };
            (verdict, Vec::new(), Some(failure))
        }
    };

    CheckResult {
        domain: domain.to_string(),
        verdict,
        server: Some(server),
        addresses,
        failure,
    }
}

/// Aggregate of a checking run.
///
/// `alive` and `dead` keep input order. Invalid and transient domains are
/// only counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Domains that resolved, in input order.
    pub alive: Vec<String>,
    /// Domains that authoritatively did not resolve, in input order.
    pub dead: Vec<String>,
    /// Lines rejected as domain names.
    pub invalid: usize,
    /// Lookups that timed out or failed unexpectedly.
    pub transient: usize,
    /// Domains processed so far, whatever their verdict.
    pub checked: usize,
    /// Domains in the input.
    pub total: usize,
    /// Set when the run stopped early; `alive` and `dead` are then empty.
    pub aborted: Option<CheckError>,
}

impl CheckSummary {
    /// Empty summary for a run over `total` domains.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// Folds one result into the summary.
    pub fn record(&mut self, result: &CheckResult) {
        self.checked += 1;
        match result.verdict {
            Verdict::Alive => self.alive.push(result.domain.clone()),
            Verdict::Dead => self.dead.push(result.domain.clone()),
            Verdict::Invalid => self.invalid += 1,
            Verdict::TransientError => self.transient += 1,
        }
    }

    /// Stops the run: both output lists are discarded.
    pub fn abort(&mut self, error: CheckError) {
        self.alive.clear();
        self.dead.clear();
        self.aborted = Some(error);
    }

    /// Whether the run stopped early.
    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    /// Number of domains with the given verdict.
    pub fn count(&self, verdict: Verdict) -> usize {
        match verdict {
            Verdict::Alive => self.alive.len(),
            Verdict::Dead => self.dead.len(),
            Verdict::Invalid => self.invalid,
            Verdict::TransientError => self.transient,
        }
    }
}
