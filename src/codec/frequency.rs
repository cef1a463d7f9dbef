//! Frequency analysis for symbol sequences.
//!
//! Counts the occurrences of each distinct symbol in an input sequence. The
//! table is the only state that has to travel with an encoded bit stream:
//! the tree and the code table are rebuilt from it on the decoding side.

use crate::codec::symbol::Symbol;
use crate::utils::error::{HuffmanError, Result};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Mapping from symbol to its (non-zero) occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    counts: BTreeMap<S, u64>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Count every symbol in `symbols`. Empty input yields an empty table.
    pub fn from_symbols(symbols: &[S]) -> Self {
        let mut table = Self::new();
        for symbol in symbols {
            table.add(symbol.clone());
        }
        table
    }

    /// Build a table from externally supplied `(symbol, count)` pairs.
    ///
    /// Counts for a repeated symbol are summed. A zero count is rejected,
    /// since a symbol that never occurs cannot have a leaf in the tree. The
    /// total must fit a `u64`; it bounds every subtree weight.
    pub fn from_counts<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut counts = BTreeMap::new();
        let mut total = 0u64;
        for (symbol, count) in pairs {
            if count == 0 {
                return Err(HuffmanError::InvalidFrequencyTable(format!(
                    "symbol {:?} has a zero count",
                    symbol
                )));
            }
            total = total.checked_add(count).ok_or_else(|| {
                HuffmanError::InvalidFrequencyTable("count overflow".to_string())
            })?;
            *counts.entry(symbol).or_insert(0u64) += count;
        }
        Ok(Self { counts })
    }

    /// Record one more occurrence of `symbol`.
    pub fn add(&mut self, symbol: S) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    /// Count for `symbol`, or 0 if it never occurred.
    pub fn get(&self, symbol: &S) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted sequence.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> btree_map::Iter<'_, S, u64> {
        self.counts.iter()
    }

    /// The only symbol, if the table holds exactly one.
    pub fn single_symbol(&self) -> Option<(&S, u64)> {
        if self.counts.len() == 1 {
            self.counts.iter().next().map(|(s, &c)| (s, c))
        } else {
            None
        }
    }

    /// Shannon entropy of the distribution in bits per symbol.
    ///
    /// Returns 0.0 for an empty table.
    pub fn entropy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        self.counts
            .values()
            .map(|&c| {
                let p = c as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S: Symbol> IntoIterator for &'a FrequencyTable<S> {
    type Item = (&'a S, &'a u64);
    type IntoIter = btree_map::Iter<'a, S, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
