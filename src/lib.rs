//! A Huffman coding library.
//!
//! Counts symbol frequencies, builds an optimal prefix-free code with a
//! min-priority queue, encodes a symbol sequence into bits and decodes it back
//! exactly. Only the frequency table needs to travel with the bits; the
//! decoder rebuilds identical codes from it.
//!
//! # Quick Start
//!
//! ```
//! use huffman_codec::{decode, encode};
//!
//! let text: Vec<char> = "aabbbcccc".chars().collect();
//! let encoded = encode(&text)?;
//! assert_eq!(encoded.bits.len(), 14);
//!
//! let decoded = decode(&encoded.bits, &encoded.frequencies)?;
//! assert_eq!(decoded, text);
//! # Ok::<(), huffman_codec::HuffmanError>(())
//! ```
//!
//! # Persistence
//!
//! ```
//! let packed = huffman_codec::compress(b"mississippi")?;
//! assert_eq!(huffman_codec::decompress(&packed)?, b"mississippi");
//! # Ok::<(), huffman_codec::HuffmanError>(())
//! ```
//!
//! # Features
//!
//! - **Generic symbols**: bytes (`u8`) and text (`char`) out of the box
//! - **Deterministic codes**: documented tie-break rule, see [`codec::tree`]
//! - **Stateless codec**: every call builds its own tables, safe to share across threads
//! - **Strict decoding**: truncated or padded streams fail instead of returning partial output

pub mod codec;
pub mod container;
pub mod utils;

// Codec API
pub use codec::{
    BitStr, Bits, CodeTable, CodecConfig, CompressionMetrics, EncodedOutput, FrequencyTable,
    HuffmanCodec, HuffmanNode, HuffmanTree, Symbol, decode, encode, format_bits, parse_bits,
};

// Persistence
pub use container::{compress, compress_str, decompress, decompress_str};

// Error types
pub use utils::error::{HuffmanError, Result};

// Constants
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
