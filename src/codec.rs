//! The codec type tying field resolution, encode and decode together.

use std::marker::PhantomData;

use tracing::debug;

use crate::config::CodecConfig;
use crate::decode::decode_records;
use crate::descriptor::{resolve, FieldDescriptor};
use crate::encode::encode_records;
use crate::error::CsvFormatError;
use crate::record::CsvRecord;

/// A CSV codec for one record type.
///
/// Construction resolves the record type's field-descriptor table once and
/// captures the configuration by value; both are immutable for the codec's
/// lifetime, so a value encoded by one call decodes through any later call
/// on the same instance. The codec holds no per-call state: `encode` and
/// `decode` take `&self` and are safe to call from multiple threads.
///
/// # Example
///
/// ```
/// use rowcodec::{CsvCodec, CsvRecord, FieldSpec, FieldValue, ValueKind};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Empl {
///     id: i64,
/// }
///
/// impl CsvRecord for Empl {
///     fn field_specs() -> Vec<FieldSpec> {
///         vec![FieldSpec::new("Id", ValueKind::Integer)]
///     }
///     fn field(&self, name: &str) -> Option<FieldValue> {
///         (name == "Id").then(|| FieldValue::Integer(self.id))
///     }
///     fn set_field(&mut self, name: &str, value: FieldValue) {
///         if let ("Id", FieldValue::Integer(v)) = (name, value) {
///             self.id = v;
///         }
///     }
/// }
///
/// let codec = CsvCodec::<Empl>::with_defaults();
/// let text = codec.encode(&[Empl { id: 7 }]);
/// assert_eq!(codec.decode(&text).unwrap(), vec![Empl { id: 7 }]);
/// ```
#[derive(Debug)]
pub struct CsvCodec<T: CsvRecord> {
    config: CodecConfig,
    descriptors: Vec<FieldDescriptor>,
    _record: PhantomData<fn() -> T>,
}

impl<T: CsvRecord> CsvCodec<T> {
    /// Builds a codec for `T`, resolving and caching its descriptor table
    /// under the given configuration.
    #[must_use]
    pub fn new(config: CodecConfig) -> Self {
        let descriptors = resolve(T::field_specs(), &config);
        debug!(
            fields = descriptors.len(),
            separator = %config.separator,
            "resolved field descriptors"
        );
        Self {
            config,
            descriptors,
            _record: PhantomData,
        }
    }

    /// Builds a codec with [`CodecConfig::default`].
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CodecConfig::default())
    }

    /// The configuration this codec was built with.
    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// The resolved descriptor table, in field-name order.
    #[must_use]
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    /// Encodes a record collection into CSV text. Infallible; an empty
    /// collection produces header-only output.
    #[must_use]
    pub fn encode(&self, records: &[T]) -> String {
        encode_records(records, &self.descriptors, &self.config)
    }

    /// Decodes CSV text into a record collection.
    ///
    /// # Errors
    ///
    /// Returns a [`CsvFormatError`] when the header is missing, a blank
    /// line is encountered while `allow_empty_lines` is off, a row carries
    /// more fields than the header declares, or a cell cannot be converted
    /// into its field's value kind. Any error aborts the whole call.
    pub fn decode(&self, text: &str) -> Result<Vec<T>, CsvFormatError> {
        decode_records(text, &self.descriptors, &self.config)
    }
}
