use crate::ports::outbound::{EventReporter, HttpClientFactory};
use crate::shared::Result;

/// NetworkClient - owns at most one HTTP client handle
///
/// The handle is created by `initialize`, not by the constructor, and is
/// released when the client is dropped. `get` issues no request.
pub struct NetworkClient<F: HttpClientFactory, R> {
    factory: F,
    handle: Option<F::Handle>,
    reporter: R,
}

impl<F, R> NetworkClient<F, R>
where
    F: HttpClientFactory,
    R: EventReporter,
{
    pub fn new(factory: F, reporter: R) -> Self {
        Self {
            factory,
            handle: None,
            reporter,
        }
    }

    /// Creates the HTTP client handle
    ///
    /// A previously created handle is released first.
    ///
    /// # Errors
    /// Returns the factory's error; the client is left without a handle
    pub fn initialize(&mut self) -> Result<()> {
        self.handle = None;
        let handle = self.factory.create()?;
        self.handle = Some(handle);
        self.reporter.report("HTTP client initialized successfully");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns a placeholder response for `url`
    pub fn get(&self, url: &str) -> String {
        format!("Response from: {}", url)
    }
}
