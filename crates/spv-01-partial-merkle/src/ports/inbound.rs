//! # Inbound Ports
//!
//! API exposed to the host: build proofs for peers, check proofs from peers.

use std::collections::HashSet;

use shared_types::{BlockHeader, Hash};

use crate::domain::{MatchResult, MerkleBlock, MerkleBlockError, PartialMerkleTree};

/// Partial Merkle tree API - inbound port.
pub trait MerkleBlockApi {
    /// Build a merkle block for the transactions flagged in `matches`.
    ///
    /// Returns the block and the matched positions in ascending order.
    ///
    /// # Panics
    ///
    /// If `txids` is empty or `matches` has a different length.
    fn build_from_match_bitmap(
        &self,
        header: BlockHeader,
        txids: &[Hash],
        matches: &[bool],
    ) -> (MerkleBlock, Vec<u32>);

    /// Build a merkle block for every txid found in `interesting`.
    ///
    /// # Panics
    ///
    /// If `txids` is empty.
    fn build_from_explicit_set(
        &self,
        header: BlockHeader,
        txids: &[Hash],
        interesting: &HashSet<Hash>,
    ) -> (MerkleBlock, Vec<u32>);

    /// Replay an untrusted partial tree.
    fn extract(&self, tree: &PartialMerkleTree) -> Result<MatchResult, MerkleBlockError>;

    /// Replay the block's tree and check the root against its header.
    fn verify_merkle_block(&self, block: &MerkleBlock) -> Result<MatchResult, MerkleBlockError>;
}
