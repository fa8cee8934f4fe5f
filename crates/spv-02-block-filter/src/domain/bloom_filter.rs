//! Core Bloom filter implementation
//!
//! The filter a light client loads into a full node so the node can decide
//! which block transactions to prove. Bit `i` of the filter is bit `i % 8` of
//! byte `i / 8`, LSB-first, matching the bytes a client sends.
//!
//! INVARIANTS:
//! - No false negatives: if inserted, contains() MUST return true
//! - An empty filter (zero bytes) matches everything

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use shared_types::{BlockTransaction, OutPoint};

use super::config::BloomConfig;
use super::hash_functions::compute_hash_positions;
use super::parameters::{calculate_fpr, calculate_optimal_parameters, MAX_FILTER_SIZE, MAX_HASH_FUNCS};
use super::script::data_pushes;
use crate::error::FilterError;

/// What a filter learns when a transaction matches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloomUpdate {
    /// Never modify the filter
    #[default]
    None,
    /// Insert the outpoint of every output whose script matched
    All,
}

impl BloomUpdate {
    /// Wire flag byte
    pub fn to_byte(self) -> u8 {
        match self {
            BloomUpdate::None => 0,
            BloomUpdate::All => 1,
        }
    }

    /// Parse a wire flag byte
    pub fn from_byte(byte: u8) -> Result<Self, FilterError> {
        match byte {
            0 => Ok(BloomUpdate::None),
            1 => Ok(BloomUpdate::All),
            other => Err(FilterError::InvalidParameters(format!(
                "unsupported update flag {}",
                other
            ))),
        }
    }
}

/// Bloom filter for probabilistic transaction matching
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    #[serde(with = "bitvec_serde")]
    bits: BitVec<u8, Lsb0>,
    /// Number of hash functions (k)
    hash_funcs: u32,
    /// Tweak for hash function variation
    tweak: u32,
    /// Update behaviour on match
    update: BloomUpdate,
}

/// Serde support for BitVec
mod bitvec_serde {
    use bitvec::prelude::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(bits: &BitVec<u8, Lsb0>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        bits.as_raw_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitVec<u8, Lsb0>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes: Vec<u8> = Deserialize::deserialize(deserializer)?;
        Ok(BitVec::<u8, Lsb0>::from_vec(bytes))
    }
}

impl BloomFilter {
    /// Create a filter sized for `elements` at `fpr`
    pub fn new(elements: usize, fpr: f64, tweak: u32, update: BloomUpdate) -> Self {
        let params = calculate_optimal_parameters(elements, fpr);
        Self {
            bits: bitvec![u8, Lsb0; 0; params.size_bytes * 8],
            hash_funcs: params.hash_count,
            tweak,
            update,
        }
    }

    /// Create a filter from a validated configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self::new(
            config.expected_elements,
            config.target_fpr,
            config.tweak,
            config.update,
        ))
    }

    /// Load a filter received from a peer, enforcing the protocol limits
    pub fn from_raw(
        data: Vec<u8>,
        hash_funcs: u32,
        tweak: u32,
        update: BloomUpdate,
    ) -> Result<Self, FilterError> {
        if data.len() > MAX_FILTER_SIZE {
            return Err(FilterError::FilterTooLarge {
                size: data.len(),
                max: MAX_FILTER_SIZE,
            });
        }
        if hash_funcs > MAX_HASH_FUNCS {
            return Err(FilterError::TooManyHashFunctions {
                count: hash_funcs,
                max: MAX_HASH_FUNCS,
            });
        }
        Ok(Self {
            bits: BitVec::from_vec(data),
            hash_funcs,
            tweak,
            update,
        })
    }

    /// Insert an element into the filter
    ///
    /// After insertion, `contains(element)` is guaranteed to return true.
    pub fn insert(&mut self, element: &[u8]) {
        if self.bits.is_empty() {
            return;
        }
        for pos in compute_hash_positions(element, self.hash_funcs, self.bits.len(), self.tweak) {
            self.bits.set(pos, true);
        }
    }

    /// Insert an outpoint (`txid || vout`)
    pub fn insert_outpoint(&mut self, outpoint: &OutPoint) {
        self.insert(&outpoint.to_bytes());
    }

    /// Test if an element might be in the filter
    pub fn contains(&self, element: &[u8]) -> bool {
        if self.bits.is_empty() {
            return true;
        }
        compute_hash_positions(element, self.hash_funcs, self.bits.len(), self.tweak)
            .iter()
            .all(|&pos| self.bits[pos])
    }

    /// Test if an outpoint might be in the filter
    pub fn contains_outpoint(&self, outpoint: &OutPoint) -> bool {
        self.contains(&outpoint.to_bytes())
    }

    /// Match a transaction, learning its outputs if configured to.
    ///
    /// Order of checks:
    /// 1. The txid
    /// 2. Each data push of each output script (on a match with
    ///    [`BloomUpdate::All`], the output's outpoint is inserted so spenders
    ///    match later)
    /// 3. Each spent outpoint, only if nothing above matched
    pub fn match_tx_and_update(&mut self, tx: &BlockTransaction) -> bool {
        let mut matched = self.contains(&tx.txid);

        for (vout, output) in tx.outputs.iter().enumerate() {
            if !data_pushes(&output.script_pubkey).any(|data| self.contains(data)) {
                continue;
            }
            matched = true;
            if self.update == BloomUpdate::All {
                self.insert_outpoint(&OutPoint::new(tx.txid, vout as u32));
            }
        }
        if matched {
            return true;
        }

        tx.inputs.iter().any(|input| self.contains_outpoint(input))
    }

    /// Current false positive rate for `elements` insertions
    pub fn false_positive_rate(&self, elements: usize) -> f64 {
        calculate_fpr(self.bits.len(), elements, self.hash_funcs)
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Get the filter size in bytes
    pub fn size_bytes(&self) -> usize {
        self.bits.len() / 8
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> u32 {
        self.hash_funcs
    }

    /// Get the tweak value
    pub fn tweak(&self) -> u32 {
        self.tweak
    }

    /// Get the update mode
    pub fn update(&self) -> BloomUpdate {
        self.update
    }

    /// Raw filter bytes as sent on the wire
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }

    /// Clear the filter (reset all bits to 0)
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }
}
