//! Resolver error categorization.
//!
//! This is the single point where `hickory-resolver` errors are mapped onto
//! [`ResolutionFailure`]. Nothing outside the DNS adapter sees resolver types.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;

use super::types::ResolutionFailure;

/// Categorizes a `ResolveError` from an A lookup into a `ResolutionFailure`.
///
/// - `NoRecordsFound` with NXDOMAIN is a missing name, with NOERROR a missing
///   A record, and with any other code (SERVFAIL, REFUSED) a nameserver failure
/// - `NoConnections` means no nameserver was reachable
/// - timeouts are recognised at the resolver, protocol and I/O layers
/// - everything else is `Other`, never an authoritative negative
pub fn categorize_resolve_error(error: &ResolveError) -> ResolutionFailure {
    match error.kind() {
        ResolveErrorKind::Timeout => ResolutionFailure::Timeout,
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NXDomain => ResolutionFailure::NoSuchName,
            ResponseCode::NoError => ResolutionFailure::NoAnswer,
            code => ResolutionFailure::NoNameservers(code.to_string()),
        },
        ResolveErrorKind::NoConnections => {
            ResolutionFailure::NoNameservers("no connections available".to_string())
        }
        ResolveErrorKind::Proto(proto) => match proto.kind() {
            ProtoErrorKind::Timeout => ResolutionFailure::Timeout,
            _ => ResolutionFailure::Other(proto.to_string()),
        },
        ResolveErrorKind::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
            ResolutionFailure::Timeout
        }
        _ => categorize_by_message(&error.to_string()),
    }
}

/// Fallback for errors that only carry a message.
///
/// hickory reports SERVFAIL/REFUSED from a lone upstream as a plain message
/// rather than `NoRecordsFound`.
fn categorize_by_message(message: &str) -> ResolutionFailure {
    let lower = message.to_lowercase();
    if lower.contains("servfail") || lower.contains("refused") {
        ResolutionFailure::NoNameservers(message.to_string())
    } else if lower.contains("timed out") || lower.contains("timeout") {
        ResolutionFailure::Timeout
    } else {
        ResolutionFailure::Other(message.to_string())
    }
}
