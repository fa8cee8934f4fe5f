//! Hash functions for the Bloom filter
//!
//! Each of the `k` functions is MurmurHash3 (32-bit) with seed
//! `i * 0xFBA4C795 + tweak`, reduced modulo the filter size in bits.

use std::io::Cursor;

/// Seed multiplier separating the hash functions.
pub const HASH_SEED_MULTIPLIER: u32 = 0xFBA4_C795;

/// Hash an element with MurmurHash3 for hash function `index`
pub fn murmur_hash(element: &[u8], index: u32, tweak: u32) -> u32 {
    let seed = index.wrapping_mul(HASH_SEED_MULTIPLIER).wrapping_add(tweak);
    let mut cursor = Cursor::new(element);
    murmur3::murmur3_32(&mut cursor, seed).unwrap_or(0)
}

/// Compute the `k` bit positions for an element
///
/// `size_bits` must be non-zero.
pub fn compute_hash_positions(element: &[u8], k: u32, size_bits: usize, tweak: u32) -> Vec<usize> {
    (0..k)
        .map(|i| (murmur_hash(element, i, tweak) as u64 % size_bits as u64) as usize)
        .collect()
}
