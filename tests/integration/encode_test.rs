//! End-to-end scenarios for the public encoding API.
//!
//! Each test drives `encode`/`encode_to_string` the way a consuming
//! application would: domain types implement the capability traits, get
//! registered through `Encodable`, and are handed to the dispatcher.

use std::any::Any;

use csv_encoder::encoder::{
    encode, encode_to_string, CsvEncode, CsvRecord, Encodable, RawCsv, Record,
};
use csv_encoder::error::EncodeError;

/// A typical application row type.
struct Measurement {
    sensor: String,
    celsius: f64,
}

impl Measurement {
    fn new(sensor: &str, celsius: f64) -> Self {
        Self {
            sensor: sensor.to_string(),
            celsius,
        }
    }
}

impl CsvRecord for Measurement {
    fn header(&self) -> Vec<String> {
        vec!["sensor".to_string(), "celsius".to_string()]
    }

    fn fields(&self) -> Vec<String> {
        vec![self.sensor.clone(), self.celsius.to_string()]
    }
}

impl Encodable for Measurement {
    fn as_record(&self) -> Option<&dyn CsvRecord> {
        Some(self)
    }
}

/// A type that takes over formatting entirely: two data rows under a
/// custom banner header, something the record form cannot express.
struct Summary {
    count: usize,
    mean: f64,
}

impl CsvEncode for Summary {
    fn to_csv(&self) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        out.extend_from_slice(b"statistic,value\n");
        out.extend_from_slice(format!("count,{}\n", self.count).as_bytes());
        out.extend_from_slice(format!("mean,{}\n", self.mean).as_bytes());
        Ok(out)
    }
}

impl CsvRecord for Summary {
    fn header(&self) -> Vec<String> {
        vec!["count".to_string(), "mean".to_string()]
    }

    fn fields(&self) -> Vec<String> {
        vec![self.count.to_string(), self.mean.to_string()]
    }
}

impl Encodable for Summary {
    fn as_encode(&self) -> Option<&dyn CsvEncode> {
        Some(self)
    }

    fn as_record(&self) -> Option<&dyn CsvRecord> {
        Some(self)
    }
}

#[test]
fn test_single_record_scenario() {
    let record = Record::new(["id", "name"], ["1", "Alice"]);
    assert_eq!(encode(&record).unwrap(), b"id,name\n1,Alice\n");
}

#[test]
fn test_two_record_collection_scenario() {
    let rows = vec![
        Record::new(["id", "name"], ["1", "Alice"]),
        Record::new(["id", "name"], ["2", "Bob"]),
    ];
    assert_eq!(encode(&rows).unwrap(), b"id,name\n1,Alice\n2,Bob\n");
}

#[test]
fn test_domain_type_collection() {
    let readings = vec![
        Measurement::new("greenhouse", 23.5),
        Measurement::new("cellar", 11.0),
    ];
    assert_eq!(
        encode_to_string(&readings).unwrap(),
        "sensor,celsius\ngreenhouse,23.5\ncellar,11\n"
    );
}

#[test]
fn test_direct_encoder_controls_whole_output() {
    let summary = Summary {
        count: 2,
        mean: 17.25,
    };
    // Summary also exposes the record capability, but its own formatting
    // must win.
    assert_eq!(
        encode_to_string(&summary).unwrap(),
        "statistic,value\ncount,2\nmean,17.25\n"
    );
}

#[test]
fn test_tagged_collection_of_one_domain_type() {
    let elements: Vec<Box<dyn Encodable>> = vec![
        Box::new(Measurement::new("greenhouse", 23.5)),
        Box::new(Measurement::new("cellar", 11.0)),
    ];
    assert_eq!(
        encode_to_string(&elements).unwrap(),
        "sensor,celsius\ngreenhouse,23.5\ncellar,11\n"
    );
}

#[test]
fn test_tagged_collection_rejects_foreign_type() {
    let elements: Vec<Box<dyn Encodable>> = vec![
        Box::new(Measurement::new("greenhouse", 23.5)),
        Box::new(Record::new(["sensor", "celsius"], ["cellar", "11"])),
    ];
    let error = encode(&elements).unwrap_err();
    assert!(matches!(
        error,
        EncodeError::ElementTypeMismatch { index: 1, .. }
    ));
}

#[test]
fn test_empty_collection_reports_error_not_empty_bytes() {
    let rows: Vec<Record> = Vec::new();
    assert!(matches!(
        encode(&rows).unwrap_err(),
        EncodeError::EmptyCollection
    ));

    let tagged: Vec<Box<dyn Encodable>> = Vec::new();
    assert!(matches!(
        encode(&tagged).unwrap_err(),
        EncodeError::EmptyCollection
    ));
}

#[test]
fn test_precomputed_bytes_pass_through() {
    let raw = RawCsv::new("a,b\n1,2\n");
    assert_eq!(encode(&raw).unwrap(), b"a,b\n1,2\n");
}

#[test]
fn test_precomputed_failure_passes_through() {
    let raw = RawCsv::failing("source table was dropped");
    let error = encode(&raw).unwrap_err();
    assert!(error.to_string().contains("source table was dropped"));
}

#[test]
fn test_any_elements_are_rejected_with_element_error() {
    let elements: Vec<Box<dyn Any>> = vec![Box::new(1u32)];
    assert!(matches!(
        encode(&elements).unwrap_err(),
        EncodeError::UnsupportedElementType(_)
    ));
}

#[test]
fn test_boxed_record_encodes_like_plain_record() {
    let plain = Record::new(["id"], ["1"]);
    let boxed: Box<dyn Encodable> = Box::new(Record::new(["id"], ["1"]));
    assert_eq!(encode(&plain).unwrap(), encode(&boxed).unwrap());
}

#[test]
fn test_output_has_no_bom_and_no_trailing_blank_line() {
    let rows = vec![Record::new(["id"], ["1"]), Record::new(["id"], ["2"])];
    let text = encode_to_string(&rows).unwrap();
    assert!(!text.starts_with('\u{feff}'));
    assert!(text.ends_with("2\n"));
    assert!(!text.ends_with("\n\n"));
}
