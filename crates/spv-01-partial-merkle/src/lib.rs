//! # SPV-01 Partial Merkle Tree
//!
//! Filtered-block proofs for lightweight clients.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Prove that some transactions are in a block without sending the rest:
//! - A full node prunes the block's merkle tree down to the branches that
//!   lead to matched transactions (flag bits + hashes)
//! - A light client replays that pruned tree, recomputes the root and
//!   compares it to the header it already trusts
//!
//! ## Security Checks
//!
//! | Check | Description |
//! |-------|-------------|
//! | Leaf-count bound | Refuse proofs claiming more transactions than a block can hold |
//! | Exact consumption | Every hash and every flag byte must be used |
//! | Identical siblings | Reject duplicate-subtree malleation (CVE-2012-2459) |
//! | Root check | Recomputed root must equal the header's merkle root |
//!
//! ## Module Structure
//!
//! ```text
//! spv-01-partial-merkle/
//! ├── domain/          # PartialMerkleTree, MerkleBlock, MatchResult, errors
//! ├── algorithms/      # Tree shape, flag packing, builder, extractor
//! ├── codec/           # Wire encoding (varints, merkle-block message)
//! ├── ports/           # API trait (inbound) + MerkleHasher (outbound)
//! ├── application/     # MerkleBlockService
//! └── config.rs        # PartialMerkleConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod application;
pub mod codec;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use algorithms::{
    build_partial_tree, compute_merkle_root, extract_matches, pack_bits, tree_height,
    unpack_bits, width,
};
pub use application::MerkleBlockService;
pub use codec::{deserialize, serialize, Decodable, Encodable, VarInt};
pub use config::PartialMerkleConfig;
pub use domain::{
    CodecError, ConfigError, MatchResult, MatchedLeaf, MerkleBlock, MerkleBlockError,
    PartialMerkleTree, DEFAULT_MAX_LEAF_COUNT,
};
pub use ports::{DoubleSha256, MerkleBlockApi, MerkleHasher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
