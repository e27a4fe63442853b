//! Decode path: header parsing, line classification and record assembly.
//!
//! Decode is all-or-nothing: the first format error aborts the call with no
//! partial result. Line numbers in errors are 1-based over the whole
//! document, header line included.

use tracing::{debug, trace};

use crate::config::CodecConfig;
use crate::descriptor::FieldDescriptor;
use crate::error::CsvFormatError;
use crate::escape::{unescape, EOF_MARKER};
use crate::record::{CsvRecord, FieldValue};

/// Splits off the first physical line, tolerating both `\n` and `\r\n`.
fn split_first_line(text: &str) -> (&str, &str) {
    match text.find('\n') {
        Some(idx) => {
            let line = text[..idx].strip_suffix('\r').unwrap_or(&text[..idx]);
            (line, &text[idx + 1..])
        }
        None => (text, ""),
    }
}

/// Decodes CSV text into a record collection.
///
/// The body newline convention (`\n` vs `\r\n`) is detected from the first
/// carriage return in the body. A leading `sep=` directive line, when
/// present, is stripped before the header is read so that text produced by
/// the encode path with a non-comma separator decodes unchanged.
pub(crate) fn decode_records<T: CsvRecord>(
    text: &str,
    descriptors: &[FieldDescriptor],
    config: &CodecConfig,
) -> Result<Vec<T>, CsvFormatError> {
    if text.trim().is_empty() {
        return Err(CsvFormatError::MissingHeader);
    }

    let (mut header_text, mut body) = split_first_line(text);
    let mut header_line = 1usize;
    if header_text.starts_with("sep=") {
        let (next_header, next_body) = split_first_line(body);
        header_text = next_header;
        body = next_body;
        header_line = 2;
    }
    if header_text.trim().is_empty() {
        return Err(CsvFormatError::MissingHeader);
    }

    let columns: Vec<&str> = header_text.split(config.separator).collect();
    let eof_token_count = if config.include_row_numbers { 2 } else { 1 };
    let value_start = if config.include_row_numbers { 1 } else { 0 };
    let line_ending = if body.contains('\r') { "\r\n" } else { "\n" };

    let mut records = Vec::new();

    if body.is_empty() {
        debug!(records = 0, "decoded header-only document");
        return Ok(records);
    }

    for (index, row) in body.split(line_ending).enumerate() {
        let line = header_line + 1 + index;

        if row.trim().is_empty() {
            if config.allow_empty_lines {
                trace!(line, "skipping blank line");
                continue;
            }
            return Err(CsvFormatError::EmptyLine { line });
        }

        let parts: Vec<&str> = row.split(config.separator).collect();

        // Sentinel row: this line and everything after it is discarded.
        if parts.len() == eof_token_count && parts[eof_token_count - 1] == EOF_MARKER {
            break;
        }

        if parts.len() > columns.len() {
            return Err(CsvFormatError::ColumnCount {
                line,
                found: parts.len(),
                expected: columns.len(),
            });
        }

        let mut record = T::default();

        for (i, part) in parts.iter().enumerate().skip(value_start) {
            let title = columns[i];

            // The synthetic row-number column has no destination field
            // unless the record really declares one with that exact name.
            if title == config.row_number_title
                && !descriptors.iter().any(|d| d.name() == config.row_number_title)
            {
                continue;
            }

            let mut cell = unescape(part, config).trim().to_string();

            if config.use_text_qualifier {
                if let Some(stripped) = cell.strip_prefix('"') {
                    cell = stripped.to_string();
                }
                if let Some(stripped) = cell.strip_suffix('"') {
                    cell = stripped.to_string();
                }
            }

            let Some(descriptor) = descriptors.iter().find(|d| d.matches_column(title)) else {
                // Unknown columns are tolerated, not errors.
                trace!(line, column = title, "ignoring unmatched column");
                continue;
            };

            // An empty cell leaves the field at its default value.
            if cell.is_empty() {
                continue;
            }

            let value = FieldValue::parse(descriptor.kind(), &cell).map_err(|source| {
                CsvFormatError::Conversion {
                    line,
                    field: descriptor.name().to_string(),
                    kind: descriptor.kind(),
                    value: cell.clone(),
                    source,
                }
            })?;

            record.set_field(descriptor.name(), value);
        }

        records.push(record);
    }

    debug!(records = records.len(), "decoded CSV document");
    Ok(records)
}
