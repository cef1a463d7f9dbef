// src/codec/config.rs

use crate::codec::metrics::DEFAULT_BASELINE_BITS;
use crate::utils::error::{HuffmanError, Result};

/// Settings for a [`HuffmanCodec`](crate::HuffmanCodec).
///
/// ```
/// use huffman_codec::CodecConfig;
///
/// let config = CodecConfig::new().with_baseline_bits(16).with_code_listing(true);
/// assert_eq!(config.baseline_bits, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Bits per original symbol used as the compression-ratio baseline.
    pub baseline_bits: u32,
    /// Log every generated code at `trace` level.
    pub log_code_table: bool,
}

impl CodecConfig {
    pub fn new() -> Self {
        Self {
            baseline_bits: DEFAULT_BASELINE_BITS,
            log_code_table: false,
        }
    }

    pub fn with_baseline_bits(mut self, bits: u32) -> Self {
        self.baseline_bits = bits;
        self
    }

    pub fn with_code_listing(mut self, enabled: bool) -> Self {
        self.log_code_table = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.baseline_bits == 0 {
            return Err(HuffmanError::InvalidConfig(
                "baseline_bits must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}
