//! # Bit Packer
//!
//! Flag bits travel LSB-first: bit `i` lives in byte `i / 8` at bit `i % 8`.
//! The last byte is zero-padded.

use bitvec::prelude::*;

/// Pack flags into bytes, LSB-first, zero-padded.
pub fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; (bits.len() + 7) / 8];
    let view = bytes.as_mut_slice().view_bits_mut::<Lsb0>();
    for (i, &bit) in bits.iter().enumerate() {
        view.set(i, bit);
    }
    bytes
}

/// Unpack every bit of `bytes`, padding included (`8 * bytes.len()` flags).
pub fn unpack_bits(bytes: &[u8]) -> Vec<bool> {
    bytes.view_bits::<Lsb0>().iter().by_vals().collect()
}
