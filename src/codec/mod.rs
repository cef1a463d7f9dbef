//! The Huffman pipeline: count, build the tree, assign codes, encode, decode.

pub mod codes;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod huffman_codec;
pub mod metrics;
pub mod symbol;
pub mod tree;

// Re-export commonly used items
pub use codes::{BitStr, Bits, CodeTable, format_bits, parse_bits};
pub use config::CodecConfig;
pub use encoder::EncodedOutput;
pub use frequency::FrequencyTable;
pub use huffman_codec::{HuffmanCodec, decode, encode};
pub use metrics::CompressionMetrics;
pub use symbol::Symbol;
pub use tree::{HuffmanNode, HuffmanTree};
