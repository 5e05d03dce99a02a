use super::ProcessSummary;
use std::path::PathBuf;

/// RunResponse - Internal response DTO for the run-application use case
#[derive(Debug, Clone)]
pub struct RunResponse {
    /// Version printed in the banner
    pub version: String,
    /// Working directory, if it could be resolved
    pub current_dir: Option<PathBuf>,
    /// Whether the network client holds an HTTP handle
    pub http_client_ready: bool,
    /// Whether the processor holds an open database connection
    pub database_connected: bool,
    pub summary: ProcessSummary,
}
