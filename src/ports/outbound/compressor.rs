use crate::shared::Result;

/// Compressor port for single-shot, bounded byte-buffer compression
pub trait Compressor {
    /// Worst-case compressed size for an input of `input_len` bytes
    fn bound(&self, input_len: usize) -> usize;

    /// Compresses `input` into a buffer no larger than `bound(input.len())`
    ///
    /// # Returns
    /// The compressed bytes, truncated to the length actually produced
    ///
    /// # Errors
    /// Returns an error if the compressed stream could not be completed
    /// within the bound
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;
}
