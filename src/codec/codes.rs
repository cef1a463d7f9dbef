//! Code assignment: walks a Huffman tree and records every root-to-leaf path.

use crate::codec::frequency::FrequencyTable;
use crate::codec::symbol::Symbol;
use crate::codec::tree::{HuffmanNode, HuffmanTree};
use bitvec::order::Msb0;
use bitvec::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Bit sequence type used for codes and encoded streams.
pub type Bits = BitVec<u8, Msb0>;

/// Borrowed view of [`Bits`].
pub type BitStr = BitSlice<u8, Msb0>;

/// Renders bits as a string of `0` and `1` characters.
pub fn format_bits(bits: &BitStr) -> String {
    bits.iter().map(|bit| if *bit { '1' } else { '0' }).collect()
}

/// Parses a string of `0` and `1` characters. Any other character yields `None`.
pub fn parse_bits(text: &str) -> Option<Bits> {
    text.chars()
        .map(|c| match c {
            '0' => Some(false),
            '1' => Some(true),
            _ => None,
        })
        .collect()
}

/// Bijective symbol <-> code mapping.
///
/// Codes are root-to-leaf paths (left = `0`, right = `1`), so no code is a
/// prefix of another. A tree that is a lone leaf gets the code `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    forward: BTreeMap<S, Bits>,
    inverse: HashMap<Bits, S>,
}

impl<S: Symbol> CodeTable<S> {
    /// Walks `tree` depth-first. `None` (empty input) gives an empty table.
    pub fn from_tree(tree: Option<&HuffmanTree<S>>) -> Self {
        let mut forward = BTreeMap::new();
        let mut inverse = HashMap::new();

        if let Some(tree) = tree {
            let mut stack: Vec<(&HuffmanNode<S>, Bits)> = vec![(tree.root(), Bits::new())];
            while let Some((node, path)) = stack.pop() {
                match node {
                    HuffmanNode::Leaf { symbol, .. } => {
                        let code = if path.is_empty() {
                            bitvec![u8, Msb0; 0]
                        } else {
                            path
                        };
                        inverse.insert(code.clone(), symbol.clone());
                        forward.insert(symbol.clone(), code);
                    }
                    HuffmanNode::Internal { left, right, .. } => {
                        let mut right_path = path.clone();
                        right_path.push(true);
                        let mut left_path = path;
                        left_path.push(false);
                        stack.push((right.as_ref(), right_path));
                        stack.push((left.as_ref(), left_path));
                    }
                }
            }
        }

        Self { forward, inverse }
    }

    /// Builds the tree for `frequencies` and assigns its codes.
    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Self {
        Self::from_tree(HuffmanTree::build(frequencies).as_ref())
    }

    /// Code for `symbol`.
    pub fn code(&self, symbol: &S) -> Option<&BitStr> {
        self.forward.get(symbol).map(|code| code.as_bitslice())
    }

    /// Symbol whose code is exactly `code`.
    pub fn symbol_for(&self, code: &BitStr) -> Option<&S> {
        self.inverse.get(code)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitStr)> {
        self.forward.iter().map(|(s, c)| (s, c.as_bitslice()))
    }

    /// Longest code length in bits, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.forward.values().map(|c| c.len()).max().unwrap_or(0)
    }

    /// Sum of `code length * frequency`: the encoded size in bits of the
    /// sequence `frequencies` was counted from. Symbols absent from this
    /// table contribute nothing.
    pub fn weighted_length(&self, frequencies: &FrequencyTable<S>) -> u64 {
        frequencies
            .iter()
            .filter_map(|(s, &count)| self.forward.get(s).map(|c| c.len() as u64 * count))
            .sum()
    }

    /// Writes the code listing to the `trace` log.
    pub fn log_listing(&self) {
        for (symbol, code) in &self.forward {
            log::trace!("{:?}: {}", symbol, format_bits(code));
        }
    }
}

impl<S: Symbol> fmt::Display for CodeTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in &self.forward {
            writeln!(f, "{:?}: {}", symbol, format_bits(code))?;
        }
        Ok(())
    }
}
