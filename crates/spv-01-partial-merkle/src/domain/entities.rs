//! # Domain Entities
//!
//! The partial tree itself, the merkle-block message that carries it, and the
//! result of replaying a proof.

use serde::{Deserialize, Serialize};
use shared_types::{hash_to_hex, BlockHeader, Hash};
use std::fmt;

/// A pruned Merkle tree proving a subset of a block's transactions.
///
/// `flag_bits` and `hash_list` are both in pre-order (depth-first, left
/// before right). `leaf_count` is the size of the original full tree, not the
/// number of hashes carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialMerkleTree {
    leaf_count: u32,
    flag_bits: Vec<bool>,
    hash_list: Vec<Hash>,
}

impl PartialMerkleTree {
    /// Assemble a tree from raw parts.
    ///
    /// No validation happens here; a tree from an untrusted peer is only
    /// trusted after extraction succeeds.
    pub fn from_parts(leaf_count: u32, flag_bits: Vec<bool>, hash_list: Vec<Hash>) -> Self {
        Self {
            leaf_count,
            flag_bits,
            hash_list,
        }
    }

    /// Total number of transactions in the block.
    pub fn leaf_count(&self) -> u32 {
        self.leaf_count
    }

    /// Pre-order "subtree contains a match" flags.
    pub fn flag_bits(&self) -> &[bool] {
        &self.flag_bits
    }

    /// Hashes of pruned subtrees and leaves, pre-order.
    pub fn hash_list(&self) -> &[Hash] {
        &self.hash_list
    }

    /// Split into `(leaf_count, flag_bits, hash_list)`.
    pub fn into_parts(self) -> (u32, Vec<bool>, Vec<Hash>) {
        (self.leaf_count, self.flag_bits, self.hash_list)
    }
}

/// A leaf recovered from a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedLeaf {
    /// Index of the transaction in block order.
    pub position: u32,
    /// Transaction id.
    pub hash: Hash,
}

impl fmt::Display for MatchedLeaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", hash_to_hex(&self.hash), self.position)
    }
}

/// Output of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Root recomputed from the partial tree.
    pub root: Hash,
    /// Matched leaves, ascending by position.
    pub matches: Vec<MatchedLeaf>,
}

impl MatchResult {
    /// Matched transaction ids in block order.
    pub fn matched_hashes(&self) -> Vec<Hash> {
        self.matches.iter().map(|m| m.hash).collect()
    }

    /// Matched positions in block order.
    pub fn matched_positions(&self) -> Vec<u32> {
        self.matches.iter().map(|m| m.position).collect()
    }
}

/// A filtered block: header plus the partial tree over its transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleBlock {
    /// Header of the block being proven.
    pub header: BlockHeader,
    /// Proof of the matched transactions.
    pub tree: PartialMerkleTree,
}

impl MerkleBlock {
    /// Pair a header with a partial tree.
    pub fn new(header: BlockHeader, tree: PartialMerkleTree) -> Self {
        Self { header, tree }
    }

    /// Hash of the carried header.
    pub fn block_hash(&self) -> Hash {
        self.header.block_hash()
    }
}
