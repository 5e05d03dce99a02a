/// Text processed when no input is configured
pub const DEFAULT_INPUT: &str = "sample data";

/// RunRequest - Internal request DTO for the run-application use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// Text handed to the processor
    pub input: String,
}

impl RunRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl Default for RunRequest {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT)
    }
}
