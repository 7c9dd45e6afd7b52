//! Unified error types for tricurve
//!
//! All fallible operations in this crate return `TricurveResult`, so a
//! caller sees one taxonomy regardless of which backend failed.

use serde::{Deserialize, Serialize};

use crate::types::CurveId;

/// Errors surfaced by scalar parsing, curve backends, and the service layer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum TricurveError {
    /// The input was not a well-formed hex scalar
    #[error("invalid hex encoding: {0}")]
    InvalidEncoding(String),

    /// The decoded scalar is zero or not below the named curve's order
    #[error("scalar out of range for {0}")]
    ScalarOutOfRange(CurveId),

    /// A backend rejected a scalar during its own re-validation
    #[error("invalid scalar for {0}")]
    InvalidScalar(CurveId),

    /// A point encoding could not be compressed or decompressed
    #[error("malformed point encoding: {0}")]
    EncodingError(String),

    /// A lower-level arithmetic failure, or a panicked backend branch
    #[error("backend failure: {0}")]
    BackendFailure(String),
}

/// Result type alias for tricurve operations
pub type TricurveResult<T> = Result<T, TricurveError>;

// MARK: - Tests
