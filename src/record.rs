//! Record metadata and field values.
//!
//! A record type registers an explicit descriptor table once by
//! implementing [`CsvRecord`]: [`CsvRecord::field_specs`] declares the
//! fields, and [`CsvRecord::field`] / [`CsvRecord::set_field`] move values
//! in and out by field name. No runtime reflection is involved; the table
//! is the single source of truth for the column set.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Date-time cell format: ISO 8601 with millisecond precision.
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Declared kind of a serializable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// `true` / `false`.
    Bool,
    /// Signed 64-bit integer.
    Integer,
    /// 64-bit floating point.
    Float,
    /// Pass-through string.
    Text,
    /// UTC date-time, formatted as ISO 8601 with millisecond precision.
    DateTime,
    /// A non-primitive reference kind. Round-trips as an opaque string but
    /// is excluded from the descriptor set while
    /// [`ignore_reference_fields`](crate::CodecConfig::ignore_reference_fields)
    /// is enabled.
    Other,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::DateTime => "date-time",
            ValueKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Runtime value of a single field.
///
/// A missing/null field is represented by [`CsvRecord::field`] returning
/// `None`, which encodes as the empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Integer(i64),
    /// Floating-point value.
    Float(f64),
    /// String value (also used for [`ValueKind::Other`] fields).
    Text(String),
    /// UTC date-time value.
    DateTime(DateTime<Utc>),
}

impl FieldValue {
    /// Renders the value with locale-invariant default formatting.
    ///
    /// Booleans render as `true`/`false`, numbers via their `Display`
    /// impls, and date-times in ISO 8601 with millisecond precision.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            FieldValue::Bool(v) => v.to_string(),
            FieldValue::Integer(v) => v.to_string(),
            FieldValue::Float(v) => v.to_string(),
            FieldValue::Text(v) => v.clone(),
            FieldValue::DateTime(v) => v.format(DATE_TIME_FORMAT).to_string(),
        }
    }

    /// Parses a cleaned cell string into a value of the given kind.
    ///
    /// Booleans are matched case-insensitively. Date-times accept RFC 3339
    /// first and fall back to the millisecond format written by
    /// [`render`](Self::render), which carries no timezone offset.
    pub fn parse(kind: ValueKind, cell: &str) -> Result<Self, ConvertError> {
        match kind {
            ValueKind::Bool => match cell.to_ascii_lowercase().as_str() {
                "true" => Ok(FieldValue::Bool(true)),
                "false" => Ok(FieldValue::Bool(false)),
                _ => Err(ConvertError::Bool(cell.to_string())),
            },
            ValueKind::Integer => Ok(FieldValue::Integer(cell.parse()?)),
            ValueKind::Float => Ok(FieldValue::Float(cell.parse()?)),
            ValueKind::Text | ValueKind::Other => Ok(FieldValue::Text(cell.to_string())),
            ValueKind::DateTime => {
                let parsed = DateTime::parse_from_rfc3339(cell)
                    .map(|dt| dt.with_timezone(&Utc))
                    .or_else(|_| {
                        chrono::NaiveDateTime::parse_from_str(cell, DATE_TIME_FORMAT)
                            .map(|ndt| ndt.and_utc())
                    })?;
                Ok(FieldValue::DateTime(parsed))
            }
        }
    }
}

/// Static metadata for one field of a record type.
///
/// A field can be excluded entirely ([`ignored`](Self::ignored)) or given
/// a display header ([`display_name`](Self::display_name) and
/// [`display_order`](Self::display_order)) that only affects header
/// generation.
///
/// # Example
///
/// ```
/// use rowcodec::{FieldSpec, ValueKind};
///
/// let spec = FieldSpec::new("employee_id", ValueKind::Integer)
///     .display_name("Employee")
///     .display_order(1);
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub(crate) name: &'static str,
    pub(crate) kind: ValueKind,
    pub(crate) display_name: Option<&'static str>,
    pub(crate) display_order: Option<u32>,
    pub(crate) ignored: bool,
}

impl FieldSpec {
    /// Declares a field with the given name and value kind.
    #[must_use]
    pub fn new(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            display_name: None,
            display_order: None,
            ignored: false,
        }
    }

    /// Overrides the header title for this field. Defaults to the field name.
    #[must_use]
    pub fn display_name(mut self, display_name: &'static str) -> Self {
        self.display_name = Some(display_name);
        self
    }

    /// Sets an explicit header position. Fields without one sort after all
    /// ordered fields, in field-name order among themselves.
    #[must_use]
    pub fn display_order(mut self, order: u32) -> Self {
        self.display_order = Some(order);
        self
    }

    /// Excludes this field from serialization entirely.
    #[must_use]
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }
}

/// A record shape the codec can serialize.
///
/// Implemented once per record type; the descriptor table it declares is
/// resolved and cached when a [`CsvCodec`](crate::CsvCodec) is built.
/// `Default` supplies the blank instance decode fills in field by field.
pub trait CsvRecord: Default {
    /// Declares one [`FieldSpec`] per serializable field.
    fn field_specs() -> Vec<FieldSpec>;

    /// Returns the current value of the named field, or `None` when the
    /// field is unset (encodes as the empty string).
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Assigns a decoded value to the named field. Implementations should
    /// ignore names or value variants they do not recognize.
    fn set_field(&mut self, name: &str, value: FieldValue);
}
