use crate::shared::Result;

/// DatabaseHandle port for an owned, open database connection
///
/// The handle is released either by `close` or by being dropped.
pub trait DatabaseHandle {
    /// Closes the connection, surfacing any error reported by the engine
    ///
    /// # Errors
    /// Returns an error if the engine refuses to release the connection
    fn close(self) -> Result<()>;
}

/// DatabaseConnector port for opening database connections
///
/// This port abstracts the embedded relational database engine so the
/// processor can be exercised without a real engine.
pub trait DatabaseConnector {
    type Handle: DatabaseHandle;

    /// Opens a new connection
    ///
    /// # Errors
    /// Returns an error carrying the engine's own error message if the
    /// connection cannot be opened
    fn open(&self) -> Result<Self::Handle>;

    /// Human-readable description of what is being opened (e.g. `:memory:`)
    fn target(&self) -> String;
}
