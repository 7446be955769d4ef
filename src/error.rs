//! Error module
//!
//! Defines the custom error type using `thiserror` for the CSV encoder.
//! Every failure the dispatcher or one of its strategies can produce is a
//! variant here; failures raised inside caller-supplied [`CsvEncode`]
//! implementations travel through the [`EncodeError::Custom`] variant
//! without being inspected or rewrapped.
//!
//! [`CsvEncode`]: crate::encoder::CsvEncode

use thiserror::Error;

/// The error type for all CSV encoding operations.
///
/// Encoding is deterministic and side-effect-free, so none of these errors
/// are retried; each one propagates straight to the caller, and no partial
/// output accompanies a failure.
///
/// # Error Categories
///
/// - **Dispatch errors**: the value (or a collection's element type)
///   supports none of the recognized capabilities
/// - **Collection errors**: empty input, or a tagged element that breaks
///   the capability or type-uniformity requirements
/// - **Row errors**: a record produced a row with no fields
/// - **Pass-through errors**: failures returned by caller-supplied direct
///   encoders, carried verbatim
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The top-level value supports no CSV encoding capability.
    ///
    /// Carries the concrete type name of the rejected value for diagnosis.
    #[error("type {0} supports no CSV encoding")]
    UnsupportedType(&'static str),

    /// A collection's declared element type supports no CSV encoding
    /// capability.
    ///
    /// Unlike [`EncodeError::ElementNotRecord`], this is a property of the
    /// element *type*, detected before any element is visited.
    #[error("collection element type {0} supports no CSV encoding")]
    UnsupportedElementType(&'static str),

    /// A collection strategy received zero elements.
    ///
    /// An empty collection has no first element to take the header row
    /// from, so this is a hard error rather than empty output.
    #[error("cannot encode an empty collection: no header can be derived")]
    EmptyCollection,

    /// An element of a tagged collection does not expose the record
    /// capability.
    ///
    /// Iteration stops at the first offending element; `index` is its
    /// position and `actual` its concrete type name.
    #[error("collection element {index} of type {actual} is not a record")]
    ElementNotRecord {
        /// Position of the offending element.
        index: usize,
        /// Concrete type name of the offending element.
        actual: &'static str,
    },

    /// An element of a tagged collection has a different concrete type
    /// than the first element.
    ///
    /// Tagged collections must be uniform: the first element fixes the
    /// expected type and every later element is checked against it.
    #[error("collection element {index} has type {actual}, expected {expected}")]
    ElementTypeMismatch {
        /// Concrete type name of the first element.
        expected: &'static str,
        /// Concrete type name of the offending element.
        actual: &'static str,
        /// Position of the offending element.
        index: usize,
    },

    /// A record produced a row with zero fields.
    ///
    /// A CSV row carries at least one field; an empty header or field list
    /// is rejected instead of producing a bare newline.
    #[error("a row must contain at least one field")]
    EmptyRow,

    /// Failure returned by a caller-supplied direct encoder.
    ///
    /// The error is boxed and opaque to the encoder core: it is neither
    /// inspected nor altered on its way back to the caller.
    #[error("direct encoder failed: {0}")]
    Custom(#[from] Box<dyn std::error::Error + Send + Sync>),
}
