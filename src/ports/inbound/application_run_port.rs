use crate::application::dto::{RunRequest, RunResponse};
use crate::shared::Result;

/// ApplicationRunPort - Inbound port for one end-to-end application run
///
/// This port defines the interface the CLI uses to trigger a run. It
/// represents the application's public API.
pub trait ApplicationRunPort {
    /// Runs the application once
    ///
    /// # Arguments
    /// * `request` - Request carrying the text to process
    ///
    /// # Returns
    /// A response describing which components came up and the
    /// processing summary
    ///
    /// # Errors
    /// Returns an error only if process-wide library initialization fails;
    /// component failures are reported and reflected in the response
    fn run(&self, request: RunRequest) -> Result<RunResponse>;
}
