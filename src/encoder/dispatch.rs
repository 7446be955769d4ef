//! Dispatcher and encoding strategies.
//!
//! [`encode`] probes a value's capabilities in a fixed precedence order
//! and hands it to the matching strategy. The order is load-bearing:
//! direct encoding is probed before the record capability so that a type
//! carrying both can take full control of its output (multiple rows, a
//! custom header, a different layout) and still be picked up by the
//! generic entry point.

use tracing::{debug, trace};

use crate::encoder::capability::{CsvRecord, Encodable, Sequence};
use crate::encoder::row::write_row;
use crate::error::EncodeError;

/// Encodes a value as CSV bytes.
///
/// Resolution order, first match wins:
///
/// 1. the direct capability — the value's own bytes or failure are
///    returned verbatim;
/// 2. the record capability — header row plus one field row;
/// 3. a sequence shape — uniform collections take the header from their
///    first element and emit one row per element; tagged collections
///    additionally require every element to expose the record capability
///    and share the first element's concrete type.
///
/// Boxed values resolve through their pointee, so one level of
/// indirection per `Box` is transparent here.
///
/// # Errors
///
/// - [`EncodeError::UnsupportedType`] when the value has no capability
/// - [`EncodeError::UnsupportedElementType`] when a sequence's element
///   interface has none
/// - [`EncodeError::EmptyCollection`] for zero-element sequences
/// - [`EncodeError::ElementNotRecord`] / [`EncodeError::ElementTypeMismatch`]
///   from tagged sequences
/// - [`EncodeError::EmptyRow`] when a record yields zero fields
/// - any failure a direct implementation chooses to return
pub fn encode(value: &dyn Encodable) -> Result<Vec<u8>, EncodeError> {
    if let Some(direct) = value.as_encode() {
        trace!(ty = value.type_name(), "value supplies its own CSV bytes");
        return direct.to_csv();
    }
    if let Some(record) = value.as_record() {
        trace!(ty = value.type_name(), "encoding single record");
        return encode_record(record);
    }
    match value.as_sequence() {
        Some(Sequence::Uniform(records)) => encode_uniform(&records),
        Some(Sequence::Tagged(elements)) => encode_tagged(&elements),
        Some(Sequence::Opaque { element }) => Err(EncodeError::UnsupportedElementType(element)),
        None => Err(EncodeError::UnsupportedType(value.type_name())),
    }
}

/// Encodes a value as a CSV string.
///
/// Convenience wrapper around [`encode`]. Record-based output is UTF-8 by
/// construction; a direct implementation emitting non-UTF-8 bytes turns
/// into a pass-through failure here.
///
/// # Errors
///
/// Everything [`encode`] returns, plus [`EncodeError::Custom`] when the
/// produced bytes are not valid UTF-8.
pub fn encode_to_string(value: &dyn Encodable) -> Result<String, EncodeError> {
    let bytes = encode(value)?;
    String::from_utf8(bytes).map_err(|err| EncodeError::Custom(Box::new(err)))
}

/// Single-record strategy: header row, then one field row.
fn encode_record(record: &dyn CsvRecord) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    write_row(&mut buf, &record.header())?;
    write_row(&mut buf, &record.fields())?;
    Ok(buf)
}

/// Uniform-collection strategy: header from the first element, one field
/// row per element in order.
///
/// Later elements' headers are never read. Element types are uniform by
/// declaration, which keeps this O(n) in field rows, at the cost that
/// divergent headers inside the collection go undetected.
fn encode_uniform(records: &[&dyn CsvRecord]) -> Result<Vec<u8>, EncodeError> {
    let Some(first) = records.first() else {
        return Err(EncodeError::EmptyCollection);
    };
    debug!(rows = records.len(), "encoding uniform collection");

    let mut buf = Vec::new();
    write_row(&mut buf, &first.header())?;
    for record in records {
        write_row(&mut buf, &record.fields())?;
    }
    Ok(buf)
}

/// Tagged-collection strategy: like the uniform strategy, but capability
/// and concrete-type uniformity are only knowable per element, so each
/// one is checked during iteration and the first violation aborts the
/// whole encode with no partial output.
fn encode_tagged(elements: &[&dyn Encodable]) -> Result<Vec<u8>, EncodeError> {
    let Some(first) = elements.first() else {
        return Err(EncodeError::EmptyCollection);
    };
    let expected = first.concrete_type();
    let expected_name = first.type_name();
    debug!(
        rows = elements.len(),
        ty = expected_name,
        "encoding tagged collection"
    );

    let mut buf = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        // Capability first, identity second: a capability-less element
        // reports ElementNotRecord even when its type also diverges.
        let record = element
            .as_record()
            .ok_or_else(|| EncodeError::ElementNotRecord {
                index,
                actual: element.type_name(),
            })?;
        if element.concrete_type() != expected {
            return Err(EncodeError::ElementTypeMismatch {
                expected: expected_name,
                actual: element.type_name(),
                index,
            });
        }
        if index == 0 {
            write_row(&mut buf, &record.header())?;
        }
        write_row(&mut buf, &record.fields())?;
    }
    Ok(buf)
}
