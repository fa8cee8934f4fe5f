//! # Domain Errors
//!
//! Error types for partial Merkle tree extraction and the wire codec.

use shared_types::Hash;
use thiserror::Error;

/// Reasons a merkle-block proof is rejected.
///
/// Every variant except [`MerkleBlockError::MerkleRootMismatch`] describes a
/// structurally invalid partial tree. Callers that only need "trust / don't
/// trust" should use [`MerkleBlockError::is_invalid_tree`] and keep the
/// variant for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleBlockError {
    /// Partial tree claims zero transactions.
    #[error("Partial merkle tree contains no transactions")]
    NoTransactions,

    /// Transaction count exceeds the configured sanity bound.
    #[error("Too many transactions: {count} > {max}")]
    TooManyTransactions {
        /// Claimed transaction count
        count: u32,
        /// Configured maximum
        max: u32,
    },

    /// More hashes than transactions.
    #[error("Proof contains more hashes than transactions: {hashes} > {transactions}")]
    TooManyHashes {
        /// Hashes carried by the proof
        hashes: usize,
        /// Claimed transaction count
        transactions: u32,
    },

    /// Fewer flag bits than hashes.
    #[error("Proof contains fewer flag bits than hashes: {bits} < {hashes}")]
    NotEnoughBits {
        /// Flag bits carried by the proof
        bits: usize,
        /// Hashes carried by the proof
        hashes: usize,
    },

    /// Traversal needed a flag bit that was not there.
    #[error("Overflowed the flag bits array")]
    BitsArrayOverflow,

    /// Traversal needed a hash that was not there.
    #[error("Overflowed the hashes array")]
    HashesArrayOverflow,

    /// Two sibling subtrees resolved to the same hash (malleated proof).
    #[error("Identical sibling hashes at height {height}, position {position}")]
    IdenticalHashesFound {
        /// Height of the parent node
        height: u32,
        /// Position of the parent node
        position: u32,
    },

    /// Flag bits left over beyond byte padding.
    #[error("Not all flag bits were consumed: used {used} of {total}")]
    NotAllBitsConsumed {
        /// Bits consumed by traversal
        used: usize,
        /// Bits carried by the proof
        total: usize,
    },

    /// Hashes left over after traversal.
    #[error("Not all hashes were consumed: used {used} of {total}")]
    NotAllHashesConsumed {
        /// Hashes consumed by traversal
        used: usize,
        /// Hashes carried by the proof
        total: usize,
    },

    /// Recomputed root does not match the header.
    #[error("Merkle root mismatch: header {expected:?}, computed {computed:?}")]
    MerkleRootMismatch {
        /// Root committed to by the block header
        expected: Hash,
        /// Root recomputed from the partial tree
        computed: Hash,
    },
}

impl MerkleBlockError {
    /// True for every structural failure of the partial tree itself.
    pub fn is_invalid_tree(&self) -> bool {
        !matches!(self, MerkleBlockError::MerkleRootMismatch { .. })
    }
}

/// Configuration rejected before a service is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A zero minimum size would make the leaf bound meaningless.
    #[error("min_transaction_size must be > 0")]
    ZeroMinTransactionSize,

    /// Not even one transaction fits in the payload.
    #[error("max_block_payload {payload} is smaller than one transaction ({min_size} bytes)")]
    PayloadBelowOneTransaction {
        /// Configured payload bound
        payload: u32,
        /// Configured minimum transaction size
        min_size: u32,
    },
}

/// Errors from decoding wire bytes.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Underlying reader failed (usually truncated input).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Variable-length integer was not minimally encoded.
    #[error("Non-minimal varint encoding")]
    NonMinimalVarInt,

    /// Length prefix asks for more data than allowed.
    #[error("Oversized vector: {requested} bytes > {max}")]
    OversizedVector {
        /// Bytes the prefix asked for
        requested: u64,
        /// Maximum accepted
        max: u64,
    },

    /// Input continued after a complete message.
    #[error("Trailing bytes after message: {0}")]
    TrailingBytes(usize),
}
