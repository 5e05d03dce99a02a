use crate::shared::Result;

/// LibraryRuntime port for process-wide library state
///
/// Covers one-time global setup (TLS backend, HTTP stack) that must
/// happen before any component is created, and its teardown.
pub trait LibraryRuntime {
    /// Initializes process-wide library state
    ///
    /// # Errors
    /// Returns an error if the global state cannot be installed
    fn initialize(&self) -> Result<()>;

    /// Tears down process-wide library state
    fn teardown(&self);
}
