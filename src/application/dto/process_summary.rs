/// Result of compressing the input handed to the processor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressionOutcome {
    /// Compression finished; holds the compressed length
    Compressed { len: usize },
    /// Compression failed; no partial buffer is kept
    Failed { reason: String },
}

/// ProcessSummary - per-call report of one processing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Input length in bytes
    pub input_len: usize,
    /// Worst-case compressed size for the input
    pub bound: usize,
    pub outcome: CompressionOutcome,
}

impl ProcessSummary {
    pub fn compressed(input_len: usize, bound: usize, len: usize) -> Self {
        Self {
            input_len,
            bound,
            outcome: CompressionOutcome::Compressed { len },
        }
    }

    pub fn failed(input_len: usize, bound: usize, reason: String) -> Self {
        Self {
            input_len,
            bound,
            outcome: CompressionOutcome::Failed { reason },
        }
    }

    /// Compressed length, if compression succeeded
    pub fn compressed_len(&self) -> Option<usize> {
        match self.outcome {
            CompressionOutcome::Compressed { len } => Some(len),
            CompressionOutcome::Failed { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.compressed_len().is_some()
    }
}
