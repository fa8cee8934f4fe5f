//! # Domain Invariants
//!
//! Rules a partial tree must satisfy to be trusted. The first three are
//! checked before traversal, the rest after it.

use super::errors::MerkleBlockError;
use shared_types::Hash;

/// Largest block payload accepted when bounding the leaf count.
pub const DEFAULT_MAX_BLOCK_PAYLOAD: u32 = 32_000_000;

/// Smallest possible serialized transaction (spends an anyone-can-spend
/// output into an empty script).
pub const MIN_TRANSACTION_SIZE: u32 = 61;

/// Default sanity bound on `leaf_count`.
pub const DEFAULT_MAX_LEAF_COUNT: u32 = DEFAULT_MAX_BLOCK_PAYLOAD / MIN_TRANSACTION_SIZE;

/// Invariant: `1 <= leaf_count <= max_leaf_count`.
pub fn invariant_leaf_count(leaf_count: u32, max_leaf_count: u32) -> Result<(), MerkleBlockError> {
    if leaf_count == 0 {
        return Err(MerkleBlockError::NoTransactions);
    }
    if leaf_count > max_leaf_count {
        return Err(MerkleBlockError::TooManyTransactions {
            count: leaf_count,
            max: max_leaf_count,
        });
    }
    Ok(())
}

/// Invariant: a proof never carries more hashes than the block has leaves.
pub fn invariant_hash_count(hashes: usize, leaf_count: u32) -> Result<(), MerkleBlockError> {
    if hashes > leaf_count as usize {
        return Err(MerkleBlockError::TooManyHashes {
            hashes,
            transactions: leaf_count,
        });
    }
    Ok(())
}

/// Invariant: every hash is announced by at least one flag bit.
pub fn invariant_flag_count(bits: usize, hashes: usize) -> Result<(), MerkleBlockError> {
    if bits < hashes {
        return Err(MerkleBlockError::NotEnoughBits { bits, hashes });
    }
    Ok(())
}

/// Invariant: every hash was consumed.
pub fn invariant_hashes_consumed(used: usize, total: usize) -> Result<(), MerkleBlockError> {
    if used != total {
        return Err(MerkleBlockError::NotAllHashesConsumed { used, total });
    }
    Ok(())
}

/// Invariant: leftover flag bits fit inside the final byte's padding.
///
/// Whole unused trailing bytes are accepted; this matches what deployed peers
/// tolerate.
pub fn invariant_bits_consumed(used: usize, total: usize) -> Result<(), MerkleBlockError> {
    if (used + 7) / 8 != (total + 7) / 8 {
        return Err(MerkleBlockError::NotAllBitsConsumed { used, total });
    }
    Ok(())
}

/// Invariant: the recomputed root is the one the header commits to.
pub fn invariant_root_matches(expected: &Hash, computed: &Hash) -> Result<(), MerkleBlockError> {
    if expected != computed {
        return Err(MerkleBlockError::MerkleRootMismatch {
            expected: *expected,
            computed: *computed,
        });
    }
    Ok(())
}
