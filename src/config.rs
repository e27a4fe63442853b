//! Codec configuration.
//!
//! [`CodecConfig`] collects every caller-settable knob of the CSV dialect.
//! A [`CsvCodec`](crate::CsvCodec) captures the configuration by value at
//! construction time, so a built codec never observes later mutation of the
//! caller's copy.

use serde::{Deserialize, Serialize};

/// Default placeholder substituted for embedded newline sequences.
pub const DEFAULT_NEWLINE_REPLACEMENT: char = '\u{0254}';

/// Default placeholder substituted for literal separator characters.
pub const DEFAULT_SEPARATOR_REPLACEMENT: char = '\u{0255}';

/// Default title of the synthetic row-number column.
pub const DEFAULT_ROW_NUMBER_TITLE: &str = "RowNumber";

/// Configuration for a [`CsvCodec`](crate::CsvCodec).
///
/// The two replacement tokens default to a pair of non-ASCII placeholder
/// characters that are unlikely to occur in field values. Values containing
/// the tokens themselves are unsupported (the substitution scheme is not
/// self-escaping).
///
/// # Example
///
/// ```
/// use rowcodec::CodecConfig;
///
/// let config = CodecConfig {
///     separator: ';',
///     emit_eof_marker: true,
///     ..CodecConfig::default()
/// };
/// assert!(config.include_row_numbers);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Field separator character.
    pub separator: char,

    /// Token substituted for embedded line breaks inside a value.
    pub newline_replacement: String,

    /// Token substituted for literal separator characters inside a value.
    pub separator_replacement: String,

    /// Title of the synthetic row-number column.
    pub row_number_title: String,

    /// Emit a 1-based row number as the first value of every data row.
    pub include_row_numbers: bool,

    /// Skip blank lines on decode. When false, a blank line is a format
    /// error naming the offending line.
    pub allow_empty_lines: bool,

    /// Append a trailing sentinel row containing the literal `EOF` token.
    pub emit_eof_marker: bool,

    /// Wrap every encoded value in a pair of double quotes and strip one
    /// leading and one trailing quote on decode. Values containing literal
    /// quote characters are unsupported under this flag.
    pub use_text_qualifier: bool,

    /// Exclude fields of non-primitive reference kinds
    /// ([`ValueKind::Other`](crate::ValueKind::Other)) from the descriptor
    /// set. Boolean, numeric, date-time and text fields are always eligible.
    pub ignore_reference_fields: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            newline_replacement: DEFAULT_NEWLINE_REPLACEMENT.to_string(),
            separator_replacement: DEFAULT_SEPARATOR_REPLACEMENT.to_string(),
            row_number_title: DEFAULT_ROW_NUMBER_TITLE.to_string(),
            include_row_numbers: true,
            allow_empty_lines: true,
            emit_eof_marker: false,
            use_text_qualifier: false,
            ignore_reference_fields: true,
        }
    }
}
