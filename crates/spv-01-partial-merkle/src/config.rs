//! # Partial Merkle Configuration
//!
//! Sanity bounds applied to proofs before they are replayed.

use serde::{Deserialize, Serialize};

use crate::domain::{ConfigError, DEFAULT_MAX_BLOCK_PAYLOAD, MIN_TRANSACTION_SIZE};

/// Configuration for proof extraction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialMerkleConfig {
    /// Largest block payload in bytes.
    pub max_block_payload: u32,

    /// Smallest possible transaction in bytes.
    pub min_transaction_size: u32,
}

impl Default for PartialMerkleConfig {
    fn default() -> Self {
        Self {
            max_block_payload: DEFAULT_MAX_BLOCK_PAYLOAD,
            min_transaction_size: MIN_TRANSACTION_SIZE,
        }
    }
}

impl PartialMerkleConfig {
    /// Create a config for testing (small blocks).
    pub fn for_testing() -> Self {
        Self {
            max_block_payload: 1_000_000,
            min_transaction_size: MIN_TRANSACTION_SIZE,
        }
    }

    /// Upper bound on the transaction count a proof may claim.
    pub fn max_leaf_count(&self) -> u32 {
        self.max_block_payload
            .checked_div(self.min_transaction_size)
            .unwrap_or(0)
    }

    /// Check the configuration can accept at least a one-transaction block.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_transaction_size == 0 {
            return Err(ConfigError::ZeroMinTransactionSize);
        }
        if self.max_leaf_count() == 0 {
            return Err(ConfigError::PayloadBelowOneTransaction {
                payload: self.max_block_payload,
                min_size: self.min_transaction_size,
            });
        }
        Ok(())
    }
}
