//! # Core Chain Entities
//!
//! The slice of a block that SPV proofs need.
//!
//! ## Clusters
//!
//! - **Header**: `BlockHeader` and its fixed 80-byte wire layout
//! - **Transactions**: `BlockTransaction`, `OutPoint`, `TxOut`
//! - **Block**: header plus ordered transactions

use serde::{Deserialize, Serialize};

use crate::hashing::sha256d;

// =============================================================================
// CLUSTER A: THE HEADER
// =============================================================================

/// A 32-byte double-SHA-256 digest in internal (wire) byte order.
pub type Hash = [u8; 32];

/// Size of an encoded block header in bytes.
pub const BLOCK_HEADER_SIZE: usize = 80;

/// The header of a block.
///
/// Field order matches the wire layout: all integers little-endian, hashes in
/// internal byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlockHeader {
    /// Block version.
    pub version: i32,
    /// Hash of the previous block header.
    pub prev_block: Hash,
    /// Merkle root of all transactions in the block.
    pub merkle_root: Hash,
    /// Unix timestamp claimed by the miner.
    pub timestamp: u32,
    /// Compact difficulty target.
    pub bits: u32,
    /// Proof-of-work nonce.
    pub nonce: u32,
}

impl BlockHeader {
    /// Encode the header into its 80-byte wire form.
    pub fn to_bytes(&self) -> [u8; BLOCK_HEADER_SIZE] {
        let mut out = [0u8; BLOCK_HEADER_SIZE];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(&self.prev_block);
        out[36..68].copy_from_slice(&self.merkle_root);
        out[68..72].copy_from_slice(&self.timestamp.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    /// Decode a header from its 80-byte wire form.
    pub fn from_bytes(bytes: &[u8; BLOCK_HEADER_SIZE]) -> Self {
        let mut prev_block = [0u8; 32];
        let mut merkle_root = [0u8; 32];
        prev_block.copy_from_slice(&bytes[4..36]);
        merkle_root.copy_from_slice(&bytes[36..68]);

        let word = |at: usize| [bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]];

        Self {
            version: i32::from_le_bytes(word(0)),
            prev_block,
            merkle_root,
            timestamp: u32::from_le_bytes(word(68)),
            bits: u32::from_le_bytes(word(72)),
            nonce: u32::from_le_bytes(word(76)),
        }
    }

    /// Compute the block hash (double SHA-256 of the encoded header).
    pub fn block_hash(&self) -> Hash {
        sha256d(&self.to_bytes())
    }
}

// =============================================================================
// CLUSTER B: TRANSACTIONS
// =============================================================================

/// Reference to a specific output of a previous transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Hash of the transaction holding the output.
    pub txid: Hash,
    /// Output index within that transaction.
    pub vout: u32,
}

impl OutPoint {
    /// Create a new outpoint.
    pub fn new(txid: Hash, vout: u32) -> Self {
        Self { txid, vout }
    }

    /// Serialize as `txid || vout (LE)`, the form inserted into filters.
    pub fn to_bytes(&self) -> [u8; 36] {
        let mut out = [0u8; 36];
        out[..32].copy_from_slice(&self.txid);
        out[32..].copy_from_slice(&self.vout.to_le_bytes());
        out
    }
}

/// A transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Amount in base units.
    pub value: u64,
    /// Locking script.
    pub script_pubkey: Vec<u8>,
}

/// A transaction as seen by the proof builder and the block filter.
///
/// Only the fields that decide "interesting" are kept: the id, the outpoints
/// being spent and the outputs being created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTransaction {
    /// Transaction id (leaf hash in the block's merkle tree).
    pub txid: Hash,
    /// Outpoints spent by this transaction's inputs.
    pub inputs: Vec<OutPoint>,
    /// Outputs created by this transaction.
    pub outputs: Vec<TxOut>,
}

impl BlockTransaction {
    /// Create a transaction from its id, spent outpoints and outputs.
    pub fn new(txid: Hash, inputs: Vec<OutPoint>, outputs: Vec<TxOut>) -> Self {
        Self {
            txid,
            inputs,
            outputs,
        }
    }

    /// Outpoints this transaction creates, one per output.
    pub fn created_outpoints(&self) -> impl Iterator<Item = OutPoint> + '_ {
        (0..self.outputs.len() as u32).map(move |vout| OutPoint::new(self.txid, vout))
    }
}

// =============================================================================
// CLUSTER C: THE BLOCK
// =============================================================================

/// A full block: header plus transactions in block order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Block {
    /// The block header.
    pub header: BlockHeader,
    /// All transactions, coinbase first.
    pub transactions: Vec<BlockTransaction>,
}

impl Block {
    /// Transaction ids in block order.
    pub fn txids(&self) -> Vec<Hash> {
        self.transactions.iter().map(|tx| tx.txid).collect()
    }
}
