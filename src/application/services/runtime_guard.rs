use crate::ports::outbound::LibraryRuntime;
use crate::shared::Result;

/// RuntimeGuard - scopes process-wide library state
///
/// `acquire` initializes the runtime; dropping the guard tears it down,
/// on every exit path and exactly once.
pub struct RuntimeGuard<'a, RT: LibraryRuntime> {
    runtime: &'a RT,
}

impl<'a, RT: LibraryRuntime> RuntimeGuard<'a, RT> {
    /// Initializes `runtime` and returns the guard owning its teardown
    ///
    /// # Errors
    /// Returns the runtime's initialization error; no teardown is
    /// scheduled in that case
    pub fn acquire(runtime: &'a RT) -> Result<Self> {
        runtime.initialize()?;
        Ok(Self { runtime })
    }
}

impl<RT: LibraryRuntime> Drop for RuntimeGuard<'_, RT> {
    fn drop(&mut self) {
        self.runtime.teardown();
    }
}
