//! # Merkle Block Service
//!
//! Application service tying the builder and extractor to a configured
//! hasher and leaf-count bound.

use std::collections::HashSet;

use shared_types::{hash_to_hex, BlockHeader, Hash};
use tracing::{debug, warn};

use crate::algorithms::{build_partial_tree, extract_matches};
use crate::config::PartialMerkleConfig;
use crate::domain::{
    invariant_root_matches, ConfigError, MatchResult, MerkleBlock, MerkleBlockError, PartialMerkleTree,
};
use crate::ports::{DoubleSha256, MerkleBlockApi, MerkleHasher};

/// Merkle Block Service - builds and checks filtered-block proofs.
#[derive(Debug, Clone)]
pub struct MerkleBlockService<H: MerkleHasher = DoubleSha256> {
    config: PartialMerkleConfig,
    hasher: H,
}

impl MerkleBlockService<DoubleSha256> {
    /// Create a service using double SHA-256.
    ///
    /// # Panics
    ///
    /// If `config` fails [`PartialMerkleConfig::validate`]. Use
    /// [`MerkleBlockService::try_new`] for configs read at runtime.
    pub fn new(config: PartialMerkleConfig) -> Self {
        Self::with_hasher(config, DoubleSha256)
    }

    /// Create a service using double SHA-256, rejecting an unusable config.
    pub fn try_new(config: PartialMerkleConfig) -> Result<Self, ConfigError> {
        Self::try_with_hasher(config, DoubleSha256)
    }
}

impl<H: MerkleHasher> MerkleBlockService<H> {
    /// Create a service with a custom node combiner.
    ///
    /// # Panics
    ///
    /// If `config` fails [`PartialMerkleConfig::validate`].
    pub fn with_hasher(config: PartialMerkleConfig, hasher: H) -> Self {
        if let Err(e) = config.validate() {
            panic!("invalid partial merkle config: {}", e);
        }
        Self { config, hasher }
    }

    /// Create a service with a custom node combiner, rejecting an unusable config.
    pub fn try_with_hasher(config: PartialMerkleConfig, hasher: H) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, hasher })
    }

    /// Active configuration.
    pub fn config(&self) -> &PartialMerkleConfig {
        &self.config
    }

    /// The node combiner.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl<H: MerkleHasher> MerkleBlockApi for MerkleBlockService<H> {
    fn build_from_match_bitmap(
        &self,
        header: BlockHeader,
        txids: &[Hash],
        matches: &[bool],
    ) -> (MerkleBlock, Vec<u32>) {
        let tree = build_partial_tree(&self.hasher, txids, matches);
        let positions: Vec<u32> = matches
            .iter()
            .enumerate()
            .filter(|(_, matched)| **matched)
            .map(|(i, _)| i as u32)
            .collect();

        debug!(
            leaf_count = tree.leaf_count(),
            hashes = tree.hash_list().len(),
            flag_bits = tree.flag_bits().len(),
            matches = positions.len(),
            "Built partial merkle tree"
        );

        (MerkleBlock::new(header, tree), positions)
    }

    fn build_from_explicit_set(
        &self,
        header: BlockHeader,
        txids: &[Hash],
        interesting: &HashSet<Hash>,
    ) -> (MerkleBlock, Vec<u32>) {
        let matches: Vec<bool> = txids.iter().map(|id| interesting.contains(id)).collect();
        self.build_from_match_bitmap(header, txids, &matches)
    }

    fn extract(&self, tree: &PartialMerkleTree) -> Result<MatchResult, MerkleBlockError> {
        match extract_matches(&self.hasher, tree, self.config.max_leaf_count()) {
            Ok(result) => {
                debug!(
                    leaf_count = tree.leaf_count(),
                    matches = result.matches.len(),
                    root = %hash_to_hex(&result.root),
                    "Extracted partial merkle tree"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(leaf_count = tree.leaf_count(), "Rejected partial merkle tree: {}", e);
                Err(e)
            }
        }
    }

    fn verify_merkle_block(&self, block: &MerkleBlock) -> Result<MatchResult, MerkleBlockError> {
        let result = self.extract(&block.tree)?;
        if let Err(e) = invariant_root_matches(&block.header.merkle_root, &result.root) {
            warn!(
                block = %hash_to_hex(&block.block_hash()),
                "Merkle block root does not match header"
            );
            return Err(e);
        }
        Ok(result)
    }
}

impl MerkleBlock {
    /// Replay the tree with default bounds and check it against the header.
    pub fn extract_and_verify(&self) -> Result<MatchResult, MerkleBlockError> {
        MerkleBlockService::new(PartialMerkleConfig::default()).verify_merkle_block(self)
    }
}
