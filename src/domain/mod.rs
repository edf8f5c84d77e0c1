//! Domain name validation.
//!
//! This module decides whether a raw input line looks like a domain name worth
//! querying. It runs before any network access: rejected lines are counted as
//! invalid and never reach the resolver.
//!
//! Key functions:
//! - `validate_domain()` - Anchored syntax check for a raw input line

use std::sync::LazyLock;

use regex::Regex;

/// One or more `[a-z0-9-]` labels (no leading/trailing hyphen) each followed
/// by a dot, then an alphabetic TLD of two or more letters.
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-zA-Z]{2,}$")
        .expect("domain pattern is a valid regex")
});

/// Returns `true` if `raw` is a syntactically plausible domain name.
///
/// The whole string must match; there is no trimming. Labels are lowercase
/// ASCII letters, digits and inner hyphens; the final label is alphabetic and
/// case-insensitive. Empty labels (`a..b`), leading or trailing dots, and
/// anything outside those classes (spaces, underscores, control characters)
/// are rejected.
///
/// # Examples
///
/// ```
/// use dns_checker::validate_domain;
///
/// assert!(validate_domain("example.com"));
/// assert!(validate_domain("sub-1.example.CO"));
/// assert!(!validate_domain("bad..example"));
/// assert!(!validate_domain("-lead.example"));
/// ```
pub fn validate_domain(raw: &str) -> bool {
    DOMAIN_PATTERN.is_match(raw)
}
