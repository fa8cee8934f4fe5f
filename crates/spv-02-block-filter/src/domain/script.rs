//! Data pushes of an output script
//!
//! A filter matches the individual data elements a script pushes (public
//! keys, key hashes, script hashes), not the script as a whole. Opcodes other
//! than pushes are skipped. A push that runs past the end of the script ends
//! the iteration.

const OP_PUSHDATA1: u8 = 0x4c;
const OP_PUSHDATA2: u8 = 0x4d;
const OP_PUSHDATA4: u8 = 0x4e;

/// Iterator over the non-empty data pushes of a script.
#[derive(Debug, Clone)]
pub struct DataPushes<'a> {
    remaining: &'a [u8],
}

/// Data pushed by `script`, in order.
pub fn data_pushes(script: &[u8]) -> DataPushes<'_> {
    DataPushes { remaining: script }
}

impl<'a> DataPushes<'a> {
    fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        if self.remaining.len() < len {
            self.remaining = &[];
            return None;
        }
        let (taken, rest) = self.remaining.split_at(len);
        self.remaining = rest;
        Some(taken)
    }

    fn read_len(&mut self, width: usize) -> Option<usize> {
        let bytes = self.take(width)?;
        let mut buf = [0u8; 4];
        buf[..width].copy_from_slice(bytes);
        Some(u32::from_le_bytes(buf) as usize)
    }
}

impl<'a> Iterator for DataPushes<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        loop {
            let (&opcode, rest) = self.remaining.split_first()?;
            self.remaining = rest;

            let len = match opcode {
                0x01..=0x4b => opcode as usize,
                OP_PUSHDATA1 => self.read_len(1)?,
                OP_PUSHDATA2 => self.read_len(2)?,
                OP_PUSHDATA4 => self.read_len(4)?,
                _ => continue,
            };
            let data = self.take(len)?;
            if !data.is_empty() {
                return Some(data);
            }
        }
    }
}
