//! Bit sequence -> symbol sequence.
//!
//! The decoder never sees the encoder's tree: it rebuilds the tree from the
//! transmitted frequency table, which yields identical codes because tree
//! construction is a pure function of the table.

use crate::codec::codes::BitStr;
use crate::codec::frequency::FrequencyTable;
use crate::codec::symbol::Symbol;
use crate::codec::tree::{HuffmanNode, HuffmanTree};
use crate::utils::error::{HuffmanError, Result};

/// Decodes `bits` against the codes implied by `frequencies`.
///
/// * Empty table: only an empty stream is valid.
/// * One symbol with count `n`: returns `n` copies; the bits are not consulted.
/// * Otherwise every bit is consumed, and the stream must end on a code
///   boundary after exactly `frequencies.total()` symbols.
///
/// On error nothing is returned, never a partial sequence.
pub fn decode_bits<S: Symbol>(bits: &BitStr, frequencies: &FrequencyTable<S>) -> Result<Vec<S>> {
    let expected = frequencies.total();

    if let Some((symbol, count)) = frequencies.single_symbol() {
        let count = usize::try_from(count).map_err(|_| {
            HuffmanError::InvalidFrequencyTable(format!("count {} exceeds address space", count))
        })?;
        if bits.len() != count {
            log::debug!(
                "single-symbol stream: {} bits for {} symbols, using count",
                bits.len(),
                count
            );
        }
        let mut out = Vec::new();
        out.try_reserve_exact(count).map_err(|e| {
            HuffmanError::InvalidFrequencyTable(format!("cannot hold {} symbols: {}", count, e))
        })?;
        out.resize(count, symbol.clone());
        return Ok(out);
    }

    let Some(tree) = HuffmanTree::build(frequencies) else {
        if bits.is_empty() {
            return Ok(Vec::new());
        }
        log::warn!("rejecting {} bits with an empty frequency table", bits.len());
        return Err(HuffmanError::InvalidFrequencyTable(format!(
            "empty table cannot decode {} bits",
            bits.len()
        )));
    };

    let capacity = usize::try_from(expected).unwrap_or(usize::MAX).min(bits.len());
    let mut out = Vec::with_capacity(capacity);
    let root = tree.root();
    let mut current = root;
    let mut pending = 0usize;

    for (consumed, bit) in bits.iter().by_vals().enumerate() {
        if out.len() as u64 == expected {
            return Err(malformed(consumed, 0, expected, expected));
        }
        if let HuffmanNode::Internal { left, right, .. } = current {
            current = if bit { right.as_ref() } else { left.as_ref() };
            pending += 1;
        }
        if let HuffmanNode::Leaf { symbol, .. } = current {
            out.push(symbol.clone());
            current = root;
            pending = 0;
        }
    }

    if pending != 0 || out.len() as u64 != expected {
        return Err(malformed(bits.len(), pending, out.len() as u64, expected));
    }

    log::debug!("decoded {} bits into {} symbols", bits.len(), out.len());
    Ok(out)
}

fn malformed(consumed: usize, pending: usize, decoded: u64, expected: u64) -> HuffmanError {
    log::warn!(
        "malformed stream at bit {}: {} pending bit(s), {}/{} symbols",
        consumed,
        pending,
        decoded,
        expected
    );
    HuffmanError::MalformedStream {
        consumed,
        pending,
        decoded,
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::codes::parse_bits;

    fn abc_table() -> FrequencyTable<char> {
        FrequencyTable::from_counts(vec![('a', 2), ('b', 3), ('c', 4)]).unwrap()
    }

    #[test]
    fn test_decodes_known_stream() {
        // c=0 a=10 b=11
        let bits = parse_bits("10101111110000").unwrap();
        let out = decode_bits(&bits, &abc_table()).unwrap();
        assert_eq!(out.into_iter().collect::<String>(), "aabbbcccc");
    }

    #[test]
    fn test_empty_table_and_empty_bits() {
        let out = decode_bits(&parse_bits("").unwrap(), &FrequencyTable::<u8>::new()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_table_with_bits_is_invalid() {
        let err = decode_bits(&parse_bits("01").unwrap(), &FrequencyTable::<u8>::new()).unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidFrequencyTable(_)));
    }

    #[test]
    fn test_single_symbol_ignores_bit_length() {
        let table = FrequencyTable::from_counts(vec![(b'q', 4)]).unwrap();
        let out = decode_bits(&parse_bits("00").unwrap(), &table).unwrap();
        assert_eq!(out, b"qqqq".to_vec());
    }

    #[test]
    fn test_single_symbol_count_beyond_memory() {
        let table = FrequencyTable::from_counts(vec![(b'q', u64::MAX)]).unwrap();
        let err = decode_bits(&parse_bits("0").unwrap(), &table).unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidFrequencyTable(_)));
    }

    #[test]
    fn test_dangling_bits_are_malformed() {
        // "aa" then a lone leading bit of another code.
        let err = decode_bits(&parse_bits("10101").unwrap(), &abc_table()).unwrap_err();
        assert!(matches!(
            err,
            HuffmanError::MalformedStream {
                consumed: 5,
                pending: 1,
                decoded: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_short_stream_on_boundary_is_malformed() {
        let err = decode_bits(&parse_bits("0").unwrap(), &abc_table()).unwrap_err();
        assert!(matches!(
            err,
            HuffmanError::MalformedStream {
                pending: 0,
                decoded: 1,
                expected: 9,
                ..
            }
        ));
    }

    #[test]
    fn test_trailing_bits_are_malformed() {
        let table = FrequencyTable::from_counts(vec![('a', 1), ('c', 1)]).unwrap();
        // a=0 c=1, then one bit too many.
        let err = decode_bits(&parse_bits("011").unwrap(), &table).unwrap_err();
        assert!(matches!(
            err,
            HuffmanError::MalformedStream {
                consumed: 2,
                decoded: 2,
                expected: 2,
                ..
            }
        ));
    }
}
