//! # Hashing Helpers
//!
//! Double SHA-256 and the reversed-hex display form used for block and
//! transaction ids.

use sha2::{Digest, Sha256};

use crate::entities::Hash;
use crate::errors::HashParseError;

/// Compute `SHA256(SHA256(data))`.
pub fn sha256d(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Render a hash in display order (byte-reversed hex).
pub fn hash_to_hex(hash: &Hash) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

/// Parse a hash from display order (byte-reversed hex).
pub fn hash_from_hex(s: &str) -> Result<Hash, HashParseError> {
    let bytes = hex::decode(s).map_err(|e| HashParseError::InvalidHex(e.to_string()))?;
    let mut hash: Hash = bytes
        .as_slice()
        .try_into()
        .map_err(|_| HashParseError::InvalidLength { got: bytes.len() })?;
    hash.reverse();
    Ok(hash)
}
