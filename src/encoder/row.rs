//! Row writer: the leaf that turns a field list into one CSV line.

use crate::error::EncodeError;

/// Appends one CSV row to `buf`: fields joined by single commas, closed by
/// one `\n`.
///
/// Field contents are written as-is. Commas, quotes, or newlines embedded
/// in a field are **not** quoted or escaped; callers who need payloads
/// containing separator characters must sanitize them first. This is a
/// deliberate, documented limitation of the format, not an oversight.
///
/// # Errors
///
/// Returns [`EncodeError::EmptyRow`] when `fields` is empty; a CSV row
/// must carry at least one field.
pub fn write_row(buf: &mut Vec<u8>, fields: &[String]) -> Result<(), EncodeError> {
    let (last, rest) = fields.split_last().ok_or(EncodeError::EmptyRow)?;
    for field in rest {
        buf.extend_from_slice(field.as_bytes());
        buf.push(b',');
    }
    buf.extend_from_slice(last.as_bytes());
    buf.push(b'\n');
    Ok(())
}
