// src/container/stream.rs

//! Self-contained serialized form of an [`EncodedOutput`].
//!
//! Layout (big-endian):
//!
//! ```text
//! [u8; 4]   magic "HUFF"
//! u8        format version (1)
//! u8        symbol kind (1 = byte, 2 = char)
//! ...       frequency table (see table_io)
//! u64       number of encoded bits
//! [u8]      bits packed MSB-first, zero-padded to a whole byte
//! ```

use crate::codec::codes::Bits;
use crate::codec::encoder::EncodedOutput;
use crate::codec::huffman_codec::HuffmanCodec;
use crate::codec::symbol::Symbol;
use crate::container::table_io::{FrequencyTableReadExt, FrequencyTableWriteExt, truncated};
use crate::utils::error::{HuffmanError, Result};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Read, Write};

pub const MAGIC: &[u8; 4] = b"HUFF";
pub const FORMAT_VERSION: u8 = 1;

/// Writes encoded streams to any `Write`.
pub trait EncodedWriteExt: Write {
    fn write_encoded<S: Symbol>(&mut self, encoded: &EncodedOutput<S>) -> Result<()>
    where
        Self: Sized,
    {
        self.write_all(MAGIC)?;
        self.write_u8(FORMAT_VERSION)?;
        self.write_u8(S::KIND)?;
        self.write_frequency_table(&encoded.frequencies)?;
        self.write_u64::<BigEndian>(encoded.bits.len() as u64)?;

        let mut packed = encoded.bits.clone();
        packed.set_uninitialized(false);
        self.write_all(packed.as_raw_slice())?;
        Ok(())
    }
}

impl<T: Write> EncodedWriteExt for T {}

/// Reads encoded streams from any `Read`.
pub trait EncodedReadExt: Read {
    fn read_encoded<S: Symbol>(&mut self) -> Result<EncodedOutput<S>>
    where
        Self: Sized,
    {
        let mut magic = [0u8; 4];
        self.read_exact(&mut magic).map_err(truncated)?;
        if &magic != MAGIC {
            return Err(HuffmanError::InvalidFormat(format!("bad magic {:02X?}", magic)));
        }

        let version = self.read_u8().map_err(truncated)?;
        if version != FORMAT_VERSION {
            return Err(HuffmanError::InvalidFormat(format!(
                "unsupported format version {}",
                version
            )));
        }

        let kind = self.read_u8().map_err(truncated)?;
        if kind != S::KIND {
            return Err(HuffmanError::InvalidFormat(format!(
                "symbol kind {} does not match expected {}",
                kind,
                S::KIND
            )));
        }

        let frequencies = self.read_frequency_table::<S>()?;

        let bit_count = self.read_u64::<BigEndian>().map_err(truncated)?;
        // A lone symbol is always written with a one-bit code.
        if let Some((_, count)) = frequencies.single_symbol() {
            if count != bit_count {
                return Err(HuffmanError::InvalidFormat(format!(
                    "single-symbol table counts {} symbols but stream has {} bits",
                    count, bit_count
                )));
            }
        }
        let byte_len = bit_count.div_ceil(8);
        let mut payload = Vec::new();
        self.by_ref().take(byte_len).read_to_end(&mut payload)?;
        if payload.len() as u64 != byte_len {
            return Err(HuffmanError::InvalidFormat(format!(
                "expected {} payload bytes, found {}",
                byte_len,
                payload.len()
            )));
        }

        let mut bits = Bits::from_vec(payload);
        bits.truncate(bit_count as usize);

        log::debug!(
            "read container: {} symbols, {} bits",
            frequencies.total(),
            bits.len()
        );
        Ok(EncodedOutput { bits, frequencies })
    }
}

impl<T: Read> EncodedReadExt for T {}

/// Serializes `encoded` into a fresh buffer.
pub fn to_bytes<S: Symbol>(encoded: &EncodedOutput<S>) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.write_encoded(encoded)?;
    Ok(out)
}

/// Parses a buffer produced by [`to_bytes`]. Trailing bytes are rejected.
pub fn from_bytes<S: Symbol>(data: &[u8]) -> Result<EncodedOutput<S>> {
    let mut cursor = Cursor::new(data);
    let encoded = cursor.read_encoded()?;
    let trailing = data.len() as u64 - cursor.position();
    if trailing != 0 {
        return Err(HuffmanError::InvalidFormat(format!(
            "{} trailing byte(s) after stream",
            trailing
        )));
    }
    Ok(encoded)
}

/// Huffman-encodes `data` into a self-contained container.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    to_bytes(&HuffmanCodec::new().encode(data)?)
}

/// Reverses [`compress`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    HuffmanCodec::new().decode_output(&from_bytes::<u8>(data)?)
}

/// Huffman-encodes `text` over its Unicode scalar values.
pub fn compress_str(text: &str) -> Result<Vec<u8>> {
    to_bytes(&HuffmanCodec::new().encode_str(text)?)
}

/// Reverses [`compress_str`].
pub fn decompress_str(data: &[u8]) -> Result<String> {
    HuffmanCodec::new().decode_to_string(&from_bytes::<char>(data)?)
}
