// src/codec/tree.rs

//! Huffman tree construction.
//!
//! The tree is built greedily from a [`FrequencyTable`] with a min-priority
//! queue: the two lightest nodes are merged until one node remains.
//!
//! # Tie-break rule
//!
//! Queue entries are ordered by `(frequency, sequence)`. Leaves take sequence
//! numbers `0..k` in ascending symbol order and every merged node takes the
//! next free number, so equal frequencies always resolve the same way. The
//! first node removed becomes the left child (bit `0`), the second the right
//! child (bit `1`). Rebuilding from the same table therefore always yields
//! the same codes.

use crate::codec::frequency::FrequencyTable;
use crate::codec::symbol::Symbol;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

/// Node in a Huffman tree. Children are owned; there are no back-pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S> {
    Leaf {
        symbol: S,
        frequency: u64,
    },
    Internal {
        frequency: u64,
        left: Box<HuffmanNode<S>>,
        right: Box<HuffmanNode<S>>,
    },
}

impl<S> HuffmanNode<S> {
    pub fn frequency(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { frequency, .. } => *frequency,
            HuffmanNode::Internal { frequency, .. } => *frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    fn merge(left: Self, right: Self) -> Self {
        HuffmanNode::Internal {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Priority queue entry carrying the deterministic tie-break key.
struct QueueEntry<S> {
    sequence: u64,
    node: HuffmanNode<S>,
}

impl<S> QueueEntry<S> {
    fn key(&self) -> (u64, u64) {
        (self.node.frequency(), self.sequence)
    }
}

impl<S> PartialEq for QueueEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for QueueEntry<S> {}

impl<S> PartialOrd for QueueEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for QueueEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// An optimal binary prefix tree for one frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffmanNode<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Builds the tree for `frequencies`.
    ///
    /// Returns `None` for an empty table. A table with a single symbol yields
    /// a tree that is just that leaf.
    pub fn build(frequencies: &FrequencyTable<S>) -> Option<Self> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut sequence = 0u64;

        for (symbol, &frequency) in frequencies {
            heap.push(Reverse(QueueEntry {
                sequence,
                node: HuffmanNode::Leaf {
                    symbol: symbol.clone(),
                    frequency,
                },
            }));
            sequence += 1;
        }

        loop {
            let Reverse(first) = heap.pop()?;
            let Some(Reverse(second)) = heap.pop() else {
                log::debug!(
                    "built Huffman tree: {} leaves, total weight {}",
                    frequencies.len(),
                    first.node.frequency()
                );
                return Some(Self { root: first.node });
            };

            heap.push(Reverse(QueueEntry {
                sequence,
                node: HuffmanNode::merge(first.node, second.node),
            }));
            sequence += 1;
        }
    }
}

impl<S: fmt::Debug> HuffmanTree<S> {
    pub fn root(&self) -> &HuffmanNode<S> {
        &self.root
    }

    /// Number of leaves, i.e. distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|(node, _)| node.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.nodes().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Pre-order walk yielding each node with its depth.
    fn nodes(&self) -> impl Iterator<Item = (&HuffmanNode<S>, usize)> {
        let mut stack = vec![(&self.root, 0usize)];
        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            if let HuffmanNode::Internal { left, right, .. } = node {
                stack.push((right.as_ref(), depth + 1));
                stack.push((left.as_ref(), depth + 1));
            }
            Some((node, depth))
        })
    }

    /// Renders the tree as indented text, right subtree listed first.
    ///
    /// ```text
    /// └── Internal (freq: 9)
    ///     ├── Internal (freq: 5)
    ///     │   ├── 'b' (freq: 3)
    ///     │   └── 'a' (freq: 2)
    ///     └── 'c' (freq: 4)
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<S: fmt::Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(&self.root, String::new(), true)];

        while let Some((node, prefix, is_last)) = stack.pop() {
            let connector = if is_last { "└── " } else { "├── " };
            match node {
                HuffmanNode::Leaf { symbol, frequency } => {
                    writeln!(f, "{}{}{:?} (freq: {})", prefix, connector, symbol, frequency)?;
                }
                HuffmanNode::Internal {
                    frequency,
                    left,
                    right,
                } => {
                    writeln!(f, "{}{}Internal (freq: {})", prefix, connector, frequency)?;
                    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
                    // Popped in reverse: right first, then left.
                    stack.push((left.as_ref(), child_prefix.clone(), true));
                    stack.push((right.as_ref(), child_prefix, false));
                }
            }
        }
        Ok(())
    }
}
