//! Error types for the Block Filter subsystem

use spv_01_partial_merkle::MerkleBlockError;
use thiserror::Error;

/// Errors that can occur in the Block Filter subsystem
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Filter size exceeds maximum: {size} > {max} bytes")]
    FilterTooLarge { size: usize, max: usize },

    #[error("Too many hash functions: {count} > {max}")]
    TooManyHashFunctions { count: u32, max: u32 },

    #[error("Invalid false positive rate: {fpr} (must be in (0, 1])")]
    InvalidFPR { fpr: f64 },

    #[error("Too many elements: {count} > {max}")]
    TooManyElements { count: usize, max: usize },

    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),

    #[error("Merkle block error: {0}")]
    MerkleBlock(#[from] MerkleBlockError),
}
