//! Error types for colorcal
//!
//! Numeric routines never fail: degenerate input short-circuits to zero values
//! and out-of-domain temperatures yield `None`. Errors only surface where
//! configuration or instrument text enters the engine.

use thiserror::Error;

/// Result type for colorcal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in colorcal operations
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Unknown color difference formula
    #[error("Unsupported Delta E mode: {0}")]
    UnsupportedDeltaE(String),

    /// Unknown whitepoint locus
    #[error("Unsupported locus: {0}")]
    UnsupportedLocus(String),

    /// Unknown standard white point
    #[error("Unknown white point: {0}")]
    UnknownWhitePoint(String),

    /// Measurement data that is not a tristimulus sample
    #[error("Invalid sample: {0}")]
    InvalidSample(String),
}
