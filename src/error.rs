//! Error types for flickergen
//!
//! Two failure kinds exist: a points specification that is neither a valid
//! percentage list nor a valid stop count, and a selector that resolves to no
//! element in the target document. Both are raised synchronously to the
//! caller; there is no retry and no rollback of custom properties that were
//! already written.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and proper
//! error trait implementations.

use thiserror::Error;

/// Result type alias for flickergen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for flickergen
///
/// # Examples
///
/// ```
/// use flickergen::error::{Error, PointsError};
///
/// fn validate() -> Result<(), Error> {
///   Err(Error::Points(PointsError::EmptyList))
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
  /// The points specification was malformed
  #[error("invalid points: {0}")]
  Points(#[from] PointsError),

  /// The configured selector matched no element
  #[error("target error: {0}")]
  Target(#[from] TargetError),
}

/// Errors produced while validating a points specification
///
/// A specification is accepted either as an ordered list of percentage stops
/// (each in 0..=100) or as a single stop count (in 0..=1000, exclusive at 0).
/// Everything else is rejected before any style mutation happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PointsError {
  /// A list entry could not be parsed as a number
  #[error("point {index} is not numeric: {raw:?}")]
  NotNumeric { index: usize, raw: String },

  /// A list entry parsed but lies outside 0..=100
  #[error("point {index} is out of range: {value} (expected 0 to 100)")]
  OutOfRange { index: usize, value: f64 },

  /// The list form was given with no entries
  #[error("points list is empty")]
  EmptyList,

  /// The count form could not be parsed as a number
  #[error("stop count is not numeric: {raw:?}")]
  CountNotNumeric { raw: String },

  /// The count form lies outside (0, 1000]
  #[error("stop count is out of range: {value} (expected more than 0, at most 1000)")]
  CountOutOfRange { value: f64 },

  /// The count form rounds to zero stops
  #[error("stop count {value} rounds to zero stops")]
  CountRoundsToZero { value: f64 },
}

/// Errors produced while resolving the target element
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TargetError {
  /// No element in the document matched the configured selector
  #[error("no element matches selector {selector:?}")]
  SelectorNotFound { selector: String },
}
