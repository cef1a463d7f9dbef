// src/container/table_io.rs

//! Binary form of a [`FrequencyTable`].
//!
//! Layout (big-endian):
//!
//! ```text
//! u32            number of entries
//! repeated:
//!   symbol       Symbol::write_symbol encoding (u8: 1 byte, char: u32)
//!   u64          count, never zero
//! ```
//!
//! Entries appear in strictly ascending symbol order.

use crate::codec::frequency::FrequencyTable;
use crate::codec::symbol::Symbol;
use crate::utils::error::{HuffmanError, Result};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// Writes frequency tables to any `Write`.
pub trait FrequencyTableWriteExt: Write {
    fn write_frequency_table<S: Symbol>(&mut self, table: &FrequencyTable<S>) -> Result<()>
    where
        Self: Sized,
    {
        let entries = u32::try_from(table.len()).map_err(|_| {
            HuffmanError::InvalidFrequencyTable(format!("{} entries do not fit a u32", table.len()))
        })?;
        self.write_u32::<BigEndian>(entries)?;
        for (symbol, &count) in table {
            symbol.write_symbol(self)?;
            self.write_u64::<BigEndian>(count)?;
        }
        Ok(())
    }
}

impl<T: Write> FrequencyTableWriteExt for T {}

/// Reads frequency tables from any `Read`.
pub trait FrequencyTableReadExt: Read {
    fn read_frequency_table<S: Symbol>(&mut self) -> Result<FrequencyTable<S>>
    where
        Self: Sized,
    {
        let entries = self.read_u32::<BigEndian>().map_err(truncated)?;
        let mut pairs: Vec<(S, u64)> = Vec::new();

        for index in 0..entries {
            let symbol = S::read_symbol(self).map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => {
                    HuffmanError::InvalidFormat(format!("entry {}: {}", index, e))
                }
                _ => truncated(e),
            })?;
            let count = self.read_u64::<BigEndian>().map_err(truncated)?;

            if let Some((previous, _)) = pairs.last() {
                if *previous >= symbol {
                    return Err(HuffmanError::InvalidFormat(format!(
                        "entry {} ({:?}) is out of order or duplicated",
                        index, symbol
                    )));
                }
            }
            pairs.push((symbol, count));
        }

        FrequencyTable::from_counts(pairs)
    }
}

impl<T: Read> FrequencyTableReadExt for T {}

/// Maps an early end of input to a format error; other I/O errors pass through.
pub(crate) fn truncated(err: io::Error) -> HuffmanError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        HuffmanError::InvalidFormat("unexpected end of data".to_string())
    } else {
        HuffmanError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_byte_table_layout() {
        let table = FrequencyTable::from_symbols(b"aab");
        let mut buf = Vec::new();
        buf.write_frequency_table(&table).unwrap();
        assert_eq!(
            buf,
            vec![
                0, 0, 0, 2, // entries
                b'a', 0, 0, 0, 0, 0, 0, 0, 2, //
                b'b', 0, 0, 0, 0, 0, 0, 0, 1,
            ]
        );
        let back: FrequencyTable<u8> = Cursor::new(buf).read_frequency_table().unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_char_table_preserves_symbols() {
        let symbols: Vec<char> = "ünïcödé ✓✓".chars().collect();
        let table = FrequencyTable::from_symbols(&symbols);
        let mut buf = Vec::new();
        buf.write_frequency_table(&table).unwrap();
        let back: FrequencyTable<char> = Cursor::new(buf).read_frequency_table().unwrap();
        assert_eq!(back, table);
        assert_eq!(back.get(&'✓'), 2);
    }

    #[test]
    fn test_zero_count_rejected() {
        let buf = vec![0, 0, 0, 1, b'x', 0, 0, 0, 0, 0, 0, 0, 0];
        let err = Cursor::new(buf).read_frequency_table::<u8>().unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidFrequencyTable(_)));
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let mut buf = vec![0, 0, 0, 2];
        for _ in 0..2 {
            buf.push(b'x');
            buf.extend_from_slice(&1u64.to_be_bytes());
        }
        let err = Cursor::new(buf).read_frequency_table::<u8>().unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidFormat(_)));
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let mut buf = vec![0, 0, 0, 2];
        buf.push(b'a');
        buf.extend_from_slice(&u64::MAX.to_be_bytes());
        buf.push(b'b');
        buf.extend_from_slice(&1u64.to_be_bytes());
        let err = Cursor::new(buf).read_frequency_table::<u8>().unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidFrequencyTable(_)));
    }

    #[test]
    fn test_truncated_table() {
        let buf = vec![0, 0, 0, 3, b'x', 0, 0];
        let err = Cursor::new(buf).read_frequency_table::<u8>().unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidFormat(_)));
    }

    #[test]
    fn test_invalid_char_rejected() {
        let mut buf = vec![0, 0, 0, 1];
        buf.extend_from_slice(&0x11_0000u32.to_be_bytes());
        buf.extend_from_slice(&1u64.to_be_bytes());
        let err = Cursor::new(buf).read_frequency_table::<char>().unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidFormat(_)));
    }
}
