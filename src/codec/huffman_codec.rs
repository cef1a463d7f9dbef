// src/codec/huffman_codec.rs

use crate::codec::codes::{BitStr, CodeTable};
use crate::codec::config::CodecConfig;
use crate::codec::decoder::decode_bits;
use crate::codec::encoder::{EncodedOutput, encode_symbols};
use crate::codec::frequency::FrequencyTable;
use crate::codec::metrics::CompressionMetrics;
use crate::codec::symbol::Symbol;
use crate::codec::tree::HuffmanTree;
use crate::utils::error::Result;

/// Huffman encoder/decoder.
///
/// The codec keeps no tables between calls: every `encode` and `decode`
/// derives its own tree and codes, so one instance can be shared freely
/// across threads and calls cannot contaminate each other.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec {
    config: CodecConfig,
}

impl HuffmanCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec after validating `config`.
    pub fn with_config(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encodes `symbols`, returning the bits and the frequency table needed
    /// to decode them.
    pub fn encode<S: Symbol>(&self, symbols: &[S]) -> Result<EncodedOutput<S>> {
        let (output, codes) = encode_symbols(symbols)?;
        if self.config.log_code_table {
            codes.log_listing();
        }
        Ok(output)
    }

    /// Recovers the symbols behind `bits`, rebuilding the codes from
    /// `frequencies`.
    pub fn decode<S: Symbol>(&self, bits: &BitStr, frequencies: &FrequencyTable<S>) -> Result<Vec<S>> {
        if self.config.log_code_table {
            CodeTable::from_frequencies(frequencies).log_listing();
        }
        decode_bits(bits, frequencies)
    }

    pub fn decode_output<S: Symbol>(&self, encoded: &EncodedOutput<S>) -> Result<Vec<S>> {
        self.decode(&encoded.bits, &encoded.frequencies)
    }

    pub fn encode_str(&self, text: &str) -> Result<EncodedOutput<char>> {
        let symbols: Vec<char> = text.chars().collect();
        self.encode(&symbols)
    }

    pub fn decode_to_string(&self, encoded: &EncodedOutput<char>) -> Result<String> {
        Ok(self.decode_output(encoded)?.into_iter().collect())
    }

    /// The codes `frequencies` produces, for listing or inspection.
    pub fn code_table<S: Symbol>(&self, frequencies: &FrequencyTable<S>) -> CodeTable<S> {
        CodeTable::from_frequencies(frequencies)
    }

    /// The tree `frequencies` produces; `None` for an empty table.
    pub fn tree<S: Symbol>(&self, frequencies: &FrequencyTable<S>) -> Option<HuffmanTree<S>> {
        HuffmanTree::build(frequencies)
    }

    /// Ratio of `encoded` against the configured per-symbol baseline.
    pub fn metrics<S: Symbol>(&self, encoded: &EncodedOutput<S>) -> CompressionMetrics {
        CompressionMetrics::with_baseline(
            encoded.symbol_count(),
            encoded.bit_len() as u64,
            self.config.baseline_bits,
        )
    }
}

/// Encodes `symbols` with the default configuration.
pub fn encode<S: Symbol>(symbols: &[S]) -> Result<EncodedOutput<S>> {
    HuffmanCodec::new().encode(symbols)
}

/// Decodes `bits` with the default configuration.
pub fn decode<S: Symbol>(bits: &BitStr, frequencies: &FrequencyTable<S>) -> Result<Vec<S>> {
    HuffmanCodec::new().decode(bits, frequencies)
}
