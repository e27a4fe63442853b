//! Encode path: header generation and row emission.
//!
//! Values are emitted per descriptor in field-name order while the header
//! is laid out in display order. The two orders coincide unless a field
//! carries an explicit display-order annotation; see
//! [`FieldSpec::display_order`](crate::FieldSpec::display_order).

use crate::config::CodecConfig;
use crate::descriptor::{header_order, FieldDescriptor};
use crate::escape::{escape, EOF_MARKER, LINE_BREAK};
use crate::record::CsvRecord;

/// Builds the single header line: display names in display order, the
/// row-number column title prepended when enabled, joined by the separator.
/// Header tokens are not escaped; header names must not contain the
/// separator or a line break.
pub(crate) fn header_line(descriptors: &[FieldDescriptor], config: &CodecConfig) -> String {
    let mut titles: Vec<&str> = Vec::with_capacity(descriptors.len() + 1);
    if config.include_row_numbers {
        titles.push(&config.row_number_title);
    }
    titles.extend(header_order(descriptors).iter().map(|d| d.display_name()));
    titles.join(&config.separator.to_string())
}

/// Encodes a record collection into CSV text.
///
/// Accepts any collection, including an empty one (header-only output).
/// Trailing whitespace is trimmed from the very end of the result only.
pub(crate) fn encode_records<T: CsvRecord>(
    records: &[T],
    descriptors: &[FieldDescriptor],
    config: &CodecConfig,
) -> String {
    let separator = config.separator.to_string();
    let mut out = String::new();

    // Spreadsheet hint so tools can detect a non-standard separator.
    if config.separator != ',' {
        out.push_str("sep=");
        out.push(config.separator);
        out.push_str(LINE_BREAK);
    }

    out.push_str(&header_line(descriptors, config));
    out.push_str(LINE_BREAK);

    let mut values: Vec<String> = Vec::with_capacity(descriptors.len() + 1);
    let mut row = 1u64;

    for record in records {
        values.clear();

        if config.include_row_numbers {
            values.push(row.to_string());
            row += 1;
        }

        for descriptor in descriptors {
            let rendered = record
                .field(descriptor.name())
                .map(|value| value.render())
                .unwrap_or_default();
            let mut cell = escape(&rendered, config);
            if config.use_text_qualifier {
                cell = format!("\"{}\"", cell);
            }
            values.push(cell);
        }

        out.push_str(&values.join(&separator));
        out.push_str(LINE_BREAK);
    }

    if config.emit_eof_marker {
        values.clear();
        if config.include_row_numbers {
            values.push(row.to_string());
        }
        values.push(EOF_MARKER.to_string());
        out.push_str(&values.join(&separator));
        out.push_str(LINE_BREAK);
    }

    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::resolve;
    use crate::record::{CsvRecord, FieldSpec, FieldValue, ValueKind};

    #[derive(Debug, Default)]
    struct Empl {
        id: i64,
        name: String,
    }

    impl CsvRecord for Empl {
        fn field_specs() -> Vec<FieldSpec> {
            vec![
                FieldSpec::new("Id", ValueKind::Integer),
                FieldSpec::new("Name", ValueKind::Text),
            ]
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "Id" => Some(FieldValue::Integer(self.id)),
                "Name" => Some(FieldValue::Text(self.name.clone())),
                _ => None,
            }
        }

        fn set_field(&mut self, name: &str, value: FieldValue) {
            match (name, value) {
                ("Id", FieldValue::Integer(v)) => self.id = v,
                ("Name", FieldValue::Text(v)) => self.name = v,
                _ => {}
            }
        }
    }

    fn descriptors(config: &CodecConfig) -> Vec<FieldDescriptor> {
        resolve(Empl::field_specs(), config)
    }

    #[test]
    fn test_header_line_with_row_numbers() {
        let config = CodecConfig::default();
        assert_eq!(header_line(&descriptors(&config), &config), "RowNumber,Id,Name");
    }

    #[test]
    fn test_header_line_without_row_numbers() {
        let config = CodecConfig {
            include_row_numbers: false,
            ..CodecConfig::default()
        };
        assert_eq!(header_line(&descriptors(&config), &config), "Id,Name");
    }

    #[test]
    fn test_encode_escapes_separator_in_value() {
        let config = CodecConfig::default();
        let records = vec![Empl {
            id: 5,
            name: "A,B".to_string(),
        }];
        let text = encode_records(&records, &descriptors(&config), &config);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("RowNumber,Id,Name"));
        assert_eq!(lines.next(), Some("1,5,A\u{0255}B"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_encode_empty_collection_is_header_only() {
        let config = CodecConfig::default();
        let text = encode_records::<Empl>(&[], &descriptors(&config), &config);
        assert_eq!(text, "RowNumber,Id,Name");
    }

    #[test]
    fn test_encode_emits_sep_directive_for_custom_separator() {
        let config = CodecConfig {
            separator: ';',
            ..CodecConfig::default()
        };
        let text = encode_records::<Empl>(&[], &descriptors(&config), &config);
        assert!(text.starts_with("sep=;"));
    }

    #[test]
    fn test_encode_eof_marker_row() {
        let config = CodecConfig {
            emit_eof_marker: true,
            ..CodecConfig::default()
        };
        let records = vec![Empl {
            id: 1,
            name: "x".to_string(),
        }];
        let text = encode_records(&records, &descriptors(&config), &config);
        assert_eq!(text.lines().last(), Some("2,EOF"));
    }

    #[test]
    fn test_encode_eof_marker_without_row_numbers() {
        let config = CodecConfig {
            emit_eof_marker: true,
            include_row_numbers: false,
            ..CodecConfig::default()
        };
        let text = encode_records::<Empl>(&[], &descriptors(&config), &config);
        assert_eq!(text.lines().last(), Some("EOF"));
    }

    #[test]
    fn test_encode_text_qualifier_wraps_values() {
        let config = CodecConfig {
            use_text_qualifier: true,
            include_row_numbers: false,
            ..CodecConfig::default()
        };
        let records = vec![Empl {
            id: 7,
            name: "plain".to_string(),
        }];
        let text = encode_records(&records, &descriptors(&config), &config);
        assert_eq!(text.lines().nth(1), Some("\"7\",\"plain\""));
    }

    #[test]
    fn test_encode_no_trailing_line_break() {
        let config = CodecConfig::default();
        let records = vec![Empl {
            id: 1,
            name: "a".to_string(),
        }];
        let text = encode_records(&records, &descriptors(&config), &config);
        assert!(!text.ends_with('\n'));
    }
}
