//! Compression ratio reporting.

use std::fmt;

/// Bits per original symbol assumed for a byte-oriented source alphabet.
pub const DEFAULT_BASELINE_BITS: u32 = 8;

/// Size comparison between an original sequence and its encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionMetrics {
    pub original_symbols: u64,
    pub encoded_bits: u64,
    pub baseline_bits: u32,
}

impl CompressionMetrics {
    pub fn new(original_symbols: u64, encoded_bits: u64) -> Self {
        Self::with_baseline(original_symbols, encoded_bits, DEFAULT_BASELINE_BITS)
    }

    pub fn with_baseline(original_symbols: u64, encoded_bits: u64, baseline_bits: u32) -> Self {
        Self {
            original_symbols,
            encoded_bits,
            baseline_bits,
        }
    }

    /// Size of the original at `baseline_bits` per symbol.
    pub fn original_bits(&self) -> u64 {
        self.original_symbols * self.baseline_bits as u64
    }

    /// `(1 - encoded / original) * 100`.
    ///
    /// Negative when the encoding is larger than the original. An empty
    /// original reports 0.0.
    pub fn ratio(&self) -> f64 {
        let original = self.original_bits();
        if original == 0 {
            return 0.0;
        }
        (1.0 - self.encoded_bits as f64 / original as f64) * 100.0
    }

    /// Average encoded bits per original symbol, 0.0 for empty input.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.original_symbols == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.original_symbols as f64
    }
}

impl fmt::Display for CompressionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} symbols ({} bits) -> {} bits, ratio {:.2}%",
            self.original_symbols,
            self.original_bits(),
            self.encoded_bits,
            self.ratio()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_for_aabbbcccc() {
        // 9 symbols * 8 = 72 bits, encoded in 14.
        let m = CompressionMetrics::new(9, 14);
        assert_eq!(m.original_bits(), 72);
        assert!((m.ratio() - (1.0 - 14.0 / 72.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_expansion_is_negative() {
        let m = CompressionMetrics::with_baseline(2, 6, 2);
        assert!(m.ratio() < 0.0);
        assert!((m.ratio() + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_original() {
        let m = CompressionMetrics::new(0, 0);
        assert_eq!(m.ratio(), 0.0);
        assert_eq!(m.bits_per_symbol(), 0.0);
    }

    #[test]
    fn test_display() {
        let m = CompressionMetrics::new(4, 16);
        assert_eq!(m.to_string(), "4 symbols (32 bits) -> 16 bits, ratio 50.00%");
    }
}
