//! Byte-level persistence for frequency tables and encoded streams.

pub mod stream;
pub mod table_io;

// Re-export commonly used types
pub use stream::{
    EncodedReadExt, EncodedWriteExt, compress, compress_str, decompress, decompress_str,
    from_bytes, to_bytes,
};
pub use table_io::{FrequencyTableReadExt, FrequencyTableWriteExt};
