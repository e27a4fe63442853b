//! Error types for the CSV codec.
//!
//! Defines [`CsvFormatError`] for decode failures and [`ConvertError`] for
//! the underlying cell-to-value conversion failures, both built with
//! `thiserror`. Decode is all-or-nothing: any `CsvFormatError` aborts the
//! whole call with no partial result. Encode has no error path.

use thiserror::Error;

use crate::record::ValueKind;

/// Failure to convert a cell string into a field's declared value kind.
///
/// Wraps the canonical parser error for each primitive kind so that a
/// [`CsvFormatError::Conversion`] can carry the original cause.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The cell is not a valid boolean (`true`/`false`, case-insensitive).
    #[error("not a boolean: {0:?}")]
    Bool(String),

    /// The cell is not a valid integer.
    #[error("not an integer: {0}")]
    Integer(#[from] std::num::ParseIntError),

    /// The cell is not a valid floating-point number.
    #[error("not a number: {0}")]
    Float(#[from] std::num::ParseFloatError),

    /// The cell is not a recognized date-time.
    #[error("not a date-time: {0}")]
    DateTime(#[from] chrono::ParseError),
}

/// The error type for [`CsvCodec::decode`](crate::CsvCodec::decode).
///
/// Every variant that refers to a physical line reports a 1-based line
/// number counted over the whole document, header line included.
#[derive(Error, Debug)]
pub enum CsvFormatError {
    /// The input contains no header line (empty or blank text).
    #[error("the CSV text has no header line")]
    MissingHeader,

    /// A blank line was encountered while `allow_empty_lines` is disabled.
    #[error("empty line at line {line}")]
    EmptyLine {
        /// 1-based line number of the blank line.
        line: usize,
    },

    /// A data row contains more fields than the header declares.
    #[error("line {line}: row has {found} fields but the header declares {expected}")]
    ColumnCount {
        /// 1-based line number of the offending row.
        line: usize,
        /// Number of fields found on the row.
        found: usize,
        /// Number of columns declared by the header.
        expected: usize,
    },

    /// A cell could not be converted into its target field's value kind.
    #[error("line {line}: cannot convert {value:?} into {kind} field '{field}'")]
    Conversion {
        /// 1-based line number of the offending row.
        line: usize,
        /// Name of the destination field.
        field: String,
        /// Declared kind of the destination field.
        kind: ValueKind,
        /// The cell content after unescaping and trimming.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: ConvertError,
    },
}
