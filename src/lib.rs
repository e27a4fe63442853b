//! rowcodec - typed-record CSV codec
//!
//! This library serializes and deserializes collections of typed records to
//! and from a CSV dialect that escapes separators and newlines by token
//! substitution instead of RFC 4180 quoting. It supports optional row
//! numbering, an optional `EOF` sentinel row, an optional text qualifier,
//! and attribute-controlled column headers.
//!
//! A record type opts in by implementing [`CsvRecord`], which supplies a
//! field-descriptor table once per type. [`CsvCodec`] resolves and caches
//! that table at construction and exposes [`CsvCodec::encode`] and
//! [`CsvCodec::decode`], which are exact inverses under a fixed
//! [`CodecConfig`].
//!
//! ```
//! use rowcodec::{CsvCodec, CsvRecord, FieldSpec, FieldValue, ValueKind};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Reading {
//!     id: i64,
//!     label: String,
//! }
//!
//! impl CsvRecord for Reading {
//!     fn field_specs() -> Vec<FieldSpec> {
//!         vec![
//!             FieldSpec::new("id", ValueKind::Integer),
//!             FieldSpec::new("label", ValueKind::Text),
//!         ]
//!     }
//!
//!     fn field(&self, name: &str) -> Option<FieldValue> {
//!         match name {
//!             "id" => Some(FieldValue::Integer(self.id)),
//!             "label" => Some(FieldValue::Text(self.label.clone())),
//!             _ => None,
//!         }
//!     }
//!
//!     fn set_field(&mut self, name: &str, value: FieldValue) {
//!         match (name, value) {
//!             ("id", FieldValue::Integer(v)) => self.id = v,
//!             ("label", FieldValue::Text(v)) => self.label = v,
//!             _ => {}
//!         }
//!     }
//! }
//!
//! let codec = CsvCodec::<Reading>::with_defaults();
//! let rows = vec![Reading { id: 5, label: "A,B".into() }];
//! let text = codec.encode(&rows);
//! assert_eq!(codec.decode(&text).unwrap(), rows);
//! ```

pub mod codec;
pub mod config;
pub mod decode;
pub mod descriptor;
pub mod encode;
pub mod error;
pub mod escape;
pub mod record;

pub use codec::CsvCodec;
pub use config::CodecConfig;
pub use descriptor::FieldDescriptor;
pub use error::{ConvertError, CsvFormatError};
pub use escape::EOF_MARKER;
pub use record::{CsvRecord, FieldSpec, FieldValue, ValueKind};
