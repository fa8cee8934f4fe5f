//! # Error Types
//!
//! Errors shared across the SPV crates.

use thiserror::Error;

/// Errors from parsing a hash out of its display form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashParseError {
    /// Input is not valid hexadecimal.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Input decodes to the wrong number of bytes.
    #[error("Invalid hash length: {got} bytes, expected 32")]
    InvalidLength { got: usize },
}
