use crate::shared::Result;

/// HttpClientFactory port for creating HTTP client handles
///
/// A handle represents one reusable session configuration. It is
/// released when dropped.
pub trait HttpClientFactory {
    type Handle;

    /// Creates a new HTTP client handle
    ///
    /// # Errors
    /// Returns an error if the underlying client cannot be built
    /// (e.g. the TLS backend fails to load)
    fn create(&self) -> Result<Self::Handle>;
}
