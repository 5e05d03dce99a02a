use crate::ports::outbound::Compressor;
use crate::shared::error::AppError;
use crate::shared::Result;
use flate2::{Compress, Compression, FlushCompress, Status};

/// zlib's default level, used when no level is configured
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Worst-case zlib output size for `input_len` bytes of input.
///
/// Same formula as zlib's `compressBound`.
pub fn compress_bound(input_len: usize) -> usize {
    input_len + (input_len >> 12) + (input_len >> 14) + (input_len >> 25) + 13
}

/// ZlibCompressor adapter producing zlib-wrapped deflate streams
///
/// Compression is single-shot into a buffer sized to `compress_bound`, the
/// way zlib's `compress2` works. The zlib-rs backend falls back to stored
/// blocks when deflate would expand the data, so any input fits the bound.
#[derive(Debug, Clone, Copy)]
pub struct ZlibCompressor {
    level: Compression,
}

impl ZlibCompressor {
    pub fn new() -> Self {
        Self::with_level(DEFAULT_COMPRESSION_LEVEL)
    }

    /// Creates a compressor for the given level (0 = stored, 9 = best)
    pub fn with_level(level: u32) -> Self {
        Self {
            level: Compression::new(level),
        }
    }

    pub fn level(&self) -> u32 {
        self.level.level()
    }
}

impl Default for ZlibCompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for ZlibCompressor {
    fn bound(&self, input_len: usize) -> usize {
        compress_bound(input_len)
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let bound = self.bound(input.len());
        let mut output = Vec::with_capacity(bound);
        let mut stream = Compress::new(self.level, true);

        // compress_vec only writes into spare capacity, so the bound is a hard cap
        let status = stream
            .compress_vec(input, &mut output, FlushCompress::Finish)
            .map_err(|e| AppError::Compression {
                input_len: input.len(),
                bound,
                details: e.to_string(),
            })?;

        match status {
            Status::StreamEnd => {
                log::debug!(
                    "zlib level {} compressed {} -> {} bytes (bound {})",
                    self.level(),
                    input.len(),
                    output.len(),
                    bound
                );
                Ok(output)
            }
            other => Err(AppError::Compression {
                input_len: input.len(),
                bound,
                details: format!(
                    "stream ended with {:?} after {} bytes",
                    other,
                    output.len()
                ),
            }
            .into()),
        }
    }
}
