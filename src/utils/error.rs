// src/utils/error.rs

use thiserror::Error;

/// The primary error type for all operations in the Huffman codec library.
///
/// Empty input is not an error: encoding nothing yields an empty bit sequence
/// and an empty frequency table, and decoding that pair yields nothing back.
#[derive(Error, Debug)]
pub enum HuffmanError {
    /// A symbol (or code) was not present in the active code table. This
    /// indicates caller misuse, e.g. a frequency table that does not belong
    /// to the data being processed.
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    /// The bit stream ended in the middle of a code, or did not contain the
    /// number of symbols the frequency table promises.
    #[error(
        "Malformed stream: {pending} unmatched bit(s) after {consumed} bit(s), \
         decoded {decoded} of {expected} symbol(s)"
    )]
    MalformedStream {
        consumed: usize,
        pending: usize,
        decoded: u64,
        expected: u64,
    },

    /// The frequency table is unusable: empty while bits are present, or
    /// holding a zero count.
    #[error("Invalid frequency table: {0}")]
    InvalidFrequencyTable(String),

    /// A codec configuration value was out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A persisted container could not be parsed.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffmanError {
    /// True for errors caused by corrupt or mismatched input data, as opposed
    /// to I/O or configuration failures.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            HuffmanError::UnknownSymbol(_)
                | HuffmanError::MalformedStream { .. }
                | HuffmanError::InvalidFrequencyTable(_)
                | HuffmanError::InvalidFormat(_)
        )
    }
}

/// A specialized `Result` type for codec operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
