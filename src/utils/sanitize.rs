//! Utilities for sanitizing untrusted text before it reaches the logs.
//!
//! Domain strings come straight from input files. A line containing an escape
//! sequence or an embedded newline could otherwise recolor the terminal or
//! forge extra log records.

use crate::config::MAX_LOG_MESSAGE_LENGTH;

/// Neutralizes control characters in a message.
///
/// Every control character (C0, DEL and C1, including `\n`, `\r`, `\t` and ESC)
/// is replaced by its visible escape form, e.g. `\u{1b}` or `\n`. All other
/// characters, including non-ASCII text, are kept as-is.
pub fn sanitize_log_message(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for c in message.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

/// Sanitizes a message and truncates it to at most `max_chars` characters.
///
/// Truncation happens on character boundaries and appends a marker with the
/// original (sanitized) length.
pub fn sanitize_and_truncate(message: &str, max_chars: usize) -> String {
    let sanitized = sanitize_log_message(message);
    let char_count = sanitized.chars().count();

    if char_count > max_chars {
        let kept: String = sanitized.chars().take(max_chars).collect();
        format!("{kept}... (truncated, original length: {char_count} chars)")
    } else {
        sanitized
    }
}

/// Sanitizes and truncates to [`MAX_LOG_MESSAGE_LENGTH`].
pub fn sanitize_for_log(message: &str) -> String {
    sanitize_and_truncate(message, MAX_LOG_MESSAGE_LENGTH)
}
