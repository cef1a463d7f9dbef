//! Symbol sequence -> bit sequence.

use crate::codec::codes::{BitStr, Bits, CodeTable};
use crate::codec::frequency::FrequencyTable;
use crate::codec::symbol::Symbol;
use crate::utils::error::{HuffmanError, Result};

/// Encoded bits plus the frequency table needed to rebuild the codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedOutput<S: Symbol> {
    pub bits: Bits,
    pub frequencies: FrequencyTable<S>,
}

impl<S: Symbol> EncodedOutput<S> {
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Number of symbols the bits decode to.
    pub fn symbol_count(&self) -> u64 {
        self.frequencies.total()
    }

    pub fn bits(&self) -> &BitStr {
        &self.bits
    }

    pub fn into_parts(self) -> (Bits, FrequencyTable<S>) {
        (self.bits, self.frequencies)
    }
}

/// Concatenates the code of every symbol in input order.
///
/// Fails with [`HuffmanError::UnknownSymbol`] if a symbol has no code, which
/// only happens when `codes` was derived from some other input.
pub fn encode_with_table<S: Symbol>(symbols: &[S], codes: &CodeTable<S>) -> Result<Bits> {
    let mut bits = Bits::with_capacity(symbols.len() * codes.max_code_len().max(1));
    for symbol in symbols {
        let code = codes
            .code(symbol)
            .ok_or_else(|| HuffmanError::UnknownSymbol(format!("{:?}", symbol)))?;
        bits.extend_from_bitslice(code);
    }
    Ok(bits)
}

/// Counts `symbols`, derives their codes and encodes them.
///
/// Empty input gives empty bits and an empty table; no tree is built.
pub fn encode_symbols<S: Symbol>(symbols: &[S]) -> Result<(EncodedOutput<S>, CodeTable<S>)> {
    let frequencies = FrequencyTable::from_symbols(symbols);
    let codes = CodeTable::from_frequencies(&frequencies);
    let bits = encode_with_table(symbols, &codes)?;

    log::debug!(
        "encoded {} symbols ({} distinct) into {} bits",
        symbols.len(),
        frequencies.len(),
        bits.len()
    );

    Ok((EncodedOutput { bits, frequencies }, codes))
}
