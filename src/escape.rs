//! Value escaping for the substitution-based CSV dialect.
//!
//! Instead of RFC 4180 quoting, this dialect keeps the separator a safe
//! delimiter by substituting placeholder tokens: every literal separator
//! inside a value becomes the separator-replacement token and every embedded
//! line break becomes the newline-replacement token. Decode applies exactly
//! one inverse substitution, so the scheme is deliberately not idempotent
//! and values containing the tokens themselves are unsupported.

use crate::config::CodecConfig;

/// Sentinel token of the optional trailing end-of-data row.
pub const EOF_MARKER: &str = "EOF";

/// Platform line-break sequence, used both to terminate output lines and as
/// the literal that [`escape`] substitutes inside values.
#[cfg(windows)]
pub const LINE_BREAK: &str = "\r\n";

/// Platform line-break sequence, used both to terminate output lines and as
/// the literal that [`escape`] substitutes inside values.
#[cfg(not(windows))]
pub const LINE_BREAK: &str = "\n";

/// Escapes a rendered value for embedding in a data row.
///
/// Separator occurrences are substituted before line breaks, matching the
/// inverse order applied by [`unescape`].
#[must_use]
pub fn escape(value: &str, config: &CodecConfig) -> String {
    value
        .replace(config.separator, &config.separator_replacement)
        .replace(LINE_BREAK, &config.newline_replacement)
}

/// Reverses exactly one application of [`escape`].
#[must_use]
pub fn unescape(value: &str, config: &CodecConfig) -> String {
    let separator = config.separator.to_string();
    value
        .replace(&config.separator_replacement, &separator)
        .replace(&config.newline_replacement, LINE_BREAK)
}
