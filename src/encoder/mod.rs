//! Encoder module
//!
//! Runtime capability dispatch from arbitrary values to CSV bytes.

pub mod capability;
pub mod dispatch;
pub mod record;
pub mod row;

// Re-export the public surface so callers use one flat path
pub use capability::{CsvEncode, CsvRecord, Encodable, Sequence};
pub use dispatch::{encode, encode_to_string};
pub use record::{RawCsv, Record};
pub use row::write_row;
