//! Final run statistics.

use log::{error, info};
use strum::IntoEnumIterator;

use crate::checker::{CheckSummary, Verdict};
use crate::utils::{percent_complete, sanitize_for_log};

/// Logs the end-of-run statistics block.
pub fn log_final_statistics(summary: &CheckSummary, elapsed_seconds: f64) {
    info!("Total domains checked: {}", summary.checked);
    for verdict in Verdict::iter() {
        info!(
            "{} domains: {}",
            capitalize(&verdict.to_string()),
            summary.count(verdict)
        );
    }

    if let Some(line) = abort_line(summary) {
        error!("{line}");
    }

    info!("Process completed in {elapsed_seconds:.1}s.");
}

fn abort_line(summary: &CheckSummary) -> Option<String> {
    summary.aborted.as_ref().map(|reason| {
        format!(
            "Run aborted at {:.2}% ({} of {} domains): {}",
            percent_complete(summary.checked, summary.total),
            summary.checked,
            summary.total,
            sanitize_for_log(&reason.to_string())
        )
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::CheckError;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("alive"), "Alive");
        assert_eq!(capitalize("transient error"), "Transient error");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_abort_line_sanitizes_pool_entry() {
        let mut summary = CheckSummary::new(4);
        summary.checked = 1;
        summary.abort(CheckError::PoolCorruption {
            server: format!("evil\n\x1b[31m{}", "x".repeat(2000)),
        });

        let line = abort_line(&summary).unwrap();

        assert!(line.starts_with("Run aborted at 25.00% (1 of 4 domains): "));
        assert!(!line.contains('\n'));
        assert!(!line.contains('\x1b'));
        assert!(line.contains("truncated"));
    }

    #[test]
    fn test_abort_line_absent_for_completed_run() {
        assert_eq!(abort_line(&CheckSummary::new(3)), None);
    }

    #[test]
    fn test_log_final_statistics_handles_aborted_summary() {
        let mut summary = CheckSummary::new(5);
        summary.checked = 2;
        summary.abort(CheckError::EmptyPool);
        // Logging must not panic on an aborted or empty summary
        log_final_statistics(&summary, 0.0);
        log_final_statistics(&CheckSummary::new(0), 0.0);
    }
}
