//! # Compact Size Integers
//!
//! Length prefixes on the wire: one byte below `0xFD`, otherwise a marker
//! byte followed by a 2, 4 or 8 byte little-endian value. Only the shortest
//! form is accepted on decode.

use std::io::Read;

use super::{Decodable, Encodable};
use crate::domain::CodecError;

/// A variable-length unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VarInt(pub u64);

impl VarInt {
    /// Bytes this value occupies when encoded.
    pub fn encoded_len(&self) -> usize {
        match self.0 {
            0..=0xFC => 1,
            0xFD..=0xFFFF => 3,
            0x1_0000..=0xFFFF_FFFF => 5,
            _ => 9,
        }
    }
}

impl Encodable for VarInt {
    fn encode(&self, out: &mut Vec<u8>) {
        match self.0 {
            0..=0xFC => out.push(self.0 as u8),
            0xFD..=0xFFFF => {
                out.push(0xFD);
                out.extend_from_slice(&(self.0 as u16).to_le_bytes());
            }
            0x1_0000..=0xFFFF_FFFF => {
                out.push(0xFE);
                out.extend_from_slice(&(self.0 as u32).to_le_bytes());
            }
            _ => {
                out.push(0xFF);
                out.extend_from_slice(&self.0.to_le_bytes());
            }
        }
    }
}

impl Decodable for VarInt {
    fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, CodecError> {
        let mut marker = [0u8; 1];
        reader.read_exact(&mut marker)?;
        match marker[0] {
            0xFF => {
                let mut buf = [0u8; 8];
                reader.read_exact(&mut buf)?;
                let value = u64::from_le_bytes(buf);
                if value < 0x1_0000_0000 {
                    return Err(CodecError::NonMinimalVarInt);
                }
                Ok(VarInt(value))
            }
            0xFE => {
                let mut buf = [0u8; 4];
                reader.read_exact(&mut buf)?;
                let value = u32::from_le_bytes(buf);
                if value < 0x1_0000 {
                    return Err(CodecError::NonMinimalVarInt);
                }
                Ok(VarInt(value as u64))
            }
            0xFD => {
                let mut buf = [0u8; 2];
                reader.read_exact(&mut buf)?;
                let value = u16::from_le_bytes(buf);
                if value < 0xFD {
                    return Err(CodecError::NonMinimalVarInt);
                }
                Ok(VarInt(value as u64))
            }
            n => Ok(VarInt(n as u64)),
        }
    }
}
