//! Ready-made value adapters for the two encoding capabilities.
//!
//! [`Record`] wraps an owned header/fields pair as a [`CsvRecord`], and
//! [`RawCsv`] wraps a precomputed byte result as a [`CsvEncode`]. Both are
//! pure value wrappers with no behavior of their own, useful when the data
//! already exists as strings or bytes and defining a dedicated type would
//! be overkill.

use crate::encoder::capability::{CsvEncode, CsvRecord, Encodable};
use crate::error::EncodeError;

/// An owned header/fields pair exposed as a [`CsvRecord`].
///
/// The constructor accepts anything convertible into strings, so string
/// literals work directly:
///
/// ```
/// use csv_encoder::encoder::{encode, Record};
///
/// let record = Record::new(["id", "name"], ["1", "Alice"]);
/// let bytes = encode(&record).unwrap();
/// assert_eq!(bytes, b"id,name\n1,Alice\n");
/// ```
///
/// Header and fields are intended to have equal length; like every
/// [`CsvRecord`], this is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Ordered column names.
    header: Vec<String>,
    /// Ordered field values.
    fields: Vec<String>,
}

impl Record {
    /// Creates a record from a header sequence and a field sequence.
    pub fn new<H, F>(header: H, fields: F) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl CsvRecord for Record {
    fn header(&self) -> Vec<String> {
        self.header.clone()
    }

    fn fields(&self) -> Vec<String> {
        self.fields.clone()
    }
}

impl Encodable for Record {
    fn as_record(&self) -> Option<&dyn CsvRecord> {
        Some(self)
    }
}

/// A precomputed CSV byte result exposed as a [`CsvEncode`].
///
/// Wraps either finished bytes ([`RawCsv::new`]) or a deferred failure
/// ([`RawCsv::failing`]); encoding returns whichever was stored. The
/// failure form is how a caller injects an error through the direct
/// pass-through channel, for instance when the bytes were produced by a
/// fallible step whose outcome should surface at encode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCsv {
    /// The finished output, already formatted by the producer.
    bytes: Vec<u8>,
    /// A deferred failure message; when set, encoding fails instead of
    /// returning `bytes`.
    error: Option<String>,
}

impl RawCsv {
    /// Wraps finished CSV bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            error: None,
        }
    }

    /// Wraps a failure to be surfaced at encode time.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            bytes: Vec::new(),
            error: Some(message.into()),
        }
    }
}

impl CsvEncode for RawCsv {
    fn to_csv(&self) -> Result<Vec<u8>, EncodeError> {
        match &self.error {
            Some(message) => Err(EncodeError::Custom(message.clone().into())),
            None => Ok(self.bytes.clone()),
        }
    }
}

impl Encodable for RawCsv {
    fn as_encode(&self) -> Option<&dyn CsvEncode> {
        Some(self)
    }
}
