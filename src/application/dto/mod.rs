/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters.
mod process_summary;
mod run_request;
mod run_response;

pub use process_summary::{CompressionOutcome, ProcessSummary};
pub use run_request::{RunRequest, DEFAULT_INPUT};
pub use run_response::RunResponse;
