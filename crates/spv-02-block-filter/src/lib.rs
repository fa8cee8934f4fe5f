//! # SPV-02 Block Filter
//!
//! Decides which transactions of a block a light client cares about and
//! turns that decision into a merkle block.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure matching logic, no I/O
//!   - `BloomFilter`: BIP37-style probabilistic filter with update-on-match
//!   - `TxidSetMatcher`: Exact txid membership
//!   - `data_pushes`: Data elements pushed by an output script
//!   - `BloomConfig` / `BloomConfigBuilder`: Configuration with validation
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `TransactionMatcher`: The "is this transaction interesting" predicate
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `match_bitmap` / `matched_indices`: Scan a block, honouring in-block
//!     spends that appear before the transaction they spend
//!   - `merkle_block_from_matcher`: Scan, then build the partial tree
//!
//! ## Invariants
//!
//! - No false negatives: if inserted, contains() MUST return true
//! - A transaction spending a matched output in the same block is matched,
//!   whatever its position in the block
//!
//! ## Usage Example
//!
//! ```ignore
//! use spv_02_block_filter::{merkle_block_from_matcher, BloomFilter, BloomUpdate};
//!
//! let mut filter = BloomFilter::new(10, 0.0001, 0, BloomUpdate::All);
//! filter.insert(&watched_key_hash);
//!
//! let (merkle_block, matched) = merkle_block_from_matcher(&block, &mut filter)?;
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{BloomConfig, BloomConfigBuilder, BloomFilter, BloomUpdate, TxidSetMatcher};
pub use error::FilterError;
pub use ports::TransactionMatcher;
pub use service::{build_merkle_block, match_bitmap, matched_indices, merkle_block_from_matcher};
