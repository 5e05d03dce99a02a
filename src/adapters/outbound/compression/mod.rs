/// Compression adapters
mod zlib_compressor;

pub use zlib_compressor::{compress_bound, ZlibCompressor, DEFAULT_COMPRESSION_LEVEL};
