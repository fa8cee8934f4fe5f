//! # Wire Codec
//!
//! Bit-exact encoding of partial trees and merkle-block messages.
//!
//! ```text
//! merkleblock := header (80) | partial tree
//! partial tree := tx_count (u32 LE)
//!               | varint n | n * hash (32, internal order)
//!               | varint m | m * flag byte (LSB-first)
//! ```
//!
//! Encoding into a `Vec<u8>` cannot fail. Decoding reads from any
//! [`std::io::Read`] and bounds every length prefix before allocating.

pub mod varint;

pub use varint::VarInt;

use std::io::{Cursor, Read};

use shared_types::{BlockHeader, Hash, BLOCK_HEADER_SIZE};

use crate::algorithms::{pack_bits, unpack_bits};
use crate::domain::{CodecError, MerkleBlock, PartialMerkleTree};

/// Largest length-prefixed payload accepted, in bytes.
pub const MAX_VEC_SIZE: u64 = 4_000_000;

/// Types with a wire encoding.
pub trait Encodable {
    /// Append the encoding of `self` to `out`.
    fn encode(&self, out: &mut Vec<u8>);
}

/// Types decodable from wire bytes.
pub trait Decodable: Sized {
    /// Read one value from `reader`.
    fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, CodecError>;
}

/// Encode a value into a fresh buffer.
pub fn serialize<T: Encodable + ?Sized>(value: &T) -> Vec<u8> {
    let mut out = Vec::new();
    value.encode(&mut out);
    out
}

/// Decode a value that must span all of `bytes`.
pub fn deserialize<T: Decodable>(bytes: &[u8]) -> Result<T, CodecError> {
    let mut cursor = Cursor::new(bytes);
    let value = T::decode(&mut cursor)?;
    let consumed = cursor.position() as usize;
    if consumed != bytes.len() {
        return Err(CodecError::TrailingBytes(bytes.len() - consumed));
    }
    Ok(value)
}

/// Read a length prefix for `elem_size`-byte elements and bound it.
fn read_len<R: Read + ?Sized>(reader: &mut R, elem_size: u64) -> Result<usize, CodecError> {
    let VarInt(len) = VarInt::decode(reader)?;
    let requested = len.saturating_mul(elem_size);
    if requested > MAX_VEC_SIZE {
        return Err(CodecError::OversizedVector {
            requested,
            max: MAX_VEC_SIZE,
        });
    }
    Ok(len as usize)
}

impl Encodable for u32 {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

impl Decodable for u32 {
    fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, CodecError> {
        let mut buf = [0u8; 4];
        reader.read_exact(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
}

impl Encodable for Hash {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

impl Decodable for Hash {
    fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, CodecError> {
        let mut hash = [0u8; 32];
        reader.read_exact(&mut hash)?;
        Ok(hash)
    }
}

impl Encodable for BlockHeader {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_bytes());
    }
}

impl Decodable for BlockHeader {
    fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, CodecError> {
        let mut buf = [0u8; BLOCK_HEADER_SIZE];
        reader.read_exact(&mut buf)?;
        Ok(BlockHeader::from_bytes(&buf))
    }
}

impl Encodable for PartialMerkleTree {
    fn encode(&self, out: &mut Vec<u8>) {
        self.leaf_count().encode(out);

        VarInt(self.hash_list().len() as u64).encode(out);
        for hash in self.hash_list() {
            hash.encode(out);
        }

        let flags = pack_bits(self.flag_bits());
        VarInt(flags.len() as u64).encode(out);
        out.extend_from_slice(&flags);
    }
}

impl Decodable for PartialMerkleTree {
    fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, CodecError> {
        let leaf_count = u32::decode(reader)?;

        let hash_count = read_len(reader, 32)?;
        let mut hash_list = Vec::with_capacity(hash_count);
        for _ in 0..hash_count {
            hash_list.push(Hash::decode(reader)?);
        }

        let flag_len = read_len(reader, 1)?;
        let mut flags = vec![0u8; flag_len];
        reader.read_exact(&mut flags)?;

        Ok(PartialMerkleTree::from_parts(
            leaf_count,
            unpack_bits(&flags),
            hash_list,
        ))
    }
}

impl Encodable for MerkleBlock {
    fn encode(&self, out: &mut Vec<u8>) {
        self.header.encode(out);
        self.tree.encode(out);
    }
}

impl Decodable for MerkleBlock {
    fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, CodecError> {
        let header = BlockHeader::decode(reader)?;
        let tree = PartialMerkleTree::decode(reader)?;
        Ok(MerkleBlock { header, tree })
    }
}
