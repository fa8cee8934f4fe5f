//! # SPV Proofs Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── exploits/         # Attack simulations against proof verification
//! │   ├── duplicate_subtree.rs
//! │   └── malformed_proofs.rs
//! │
//! ├── integration/      # Filter -> merkle block -> wire -> verify
//! │
//! └── vectors/          # Testnet merkle blocks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p spv-tests
//!
//! # By category
//! cargo test -p spv-tests integration::
//! cargo test -p spv-tests exploits::
//! cargo test -p spv-tests vectors::
//!
//! # With logs
//! RUST_LOG=debug cargo test -p spv-tests -- --nocapture
//!
//! # Benchmarks
//! cargo bench -p spv-tests
//! ```

pub mod exploits;
pub mod vectors;

use shared_types::{BlockHeader, BlockTransaction, Hash};
use spv_01_partial_merkle::{compute_merkle_root, DoubleSha256};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly tracing subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic, distinct txid for index `n`
pub fn txid(n: u32) -> Hash {
    let mut hash = [0u8; 32];
    hash[..4].copy_from_slice(&n.to_le_bytes());
    hash[31] = 0x5A;
    hash
}

/// Header committing to `txids`
pub fn header_for(txids: &[Hash]) -> BlockHeader {
    BlockHeader {
        version: 0x2000_0000,
        merkle_root: compute_merkle_root(&DoubleSha256, txids).unwrap_or_default(),
        timestamp: 1_600_000_000,
        bits: 0x1d00_ffff,
        ..BlockHeader::default()
    }
}

/// Transaction with no inputs and a single output paying `script`
pub fn paying_tx(id: Hash, script: &[u8]) -> BlockTransaction {
    BlockTransaction::new(
        id,
        vec![],
        vec![shared_types::TxOut { value: 5_000, script_pubkey: script.to_vec() }],
    )
}
