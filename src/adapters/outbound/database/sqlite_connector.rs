use crate::ports::outbound::{DatabaseConnector, DatabaseHandle};
use crate::shared::error::AppError;
use crate::shared::Result;
use rusqlite::Connection;

/// SQLite's name for a private, in-memory database
const IN_MEMORY_TARGET: &str = ":memory:";

/// SqliteConnector adapter opening in-memory SQLite databases
///
/// Every call to `open` yields a fresh, private database that lives only as
/// long as the returned handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteConnector;

impl SqliteConnector {
    pub fn in_memory() -> Self {
        Self
    }
}

/// An open SQLite connection, closed when dropped or via `close`
pub struct SqliteHandle {
    conn: Connection,
}

impl SqliteHandle {
    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl DatabaseHandle for SqliteHandle {
    fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_conn, e)| anyhow::anyhow!("Failed to close SQLite database: {}", e))
    }
}

impl DatabaseConnector for SqliteConnector {
    type Handle = SqliteHandle;

    fn open(&self) -> Result<SqliteHandle> {
        let conn = Connection::open_in_memory().map_err(|e| AppError::DatabaseOpen {
            target: IN_MEMORY_TARGET.to_string(),
            details: e.to_string(),
        })?;

        log::debug!(
            "opened SQLite {} database (engine {})",
            IN_MEMORY_TARGET,
            rusqlite::version()
        );

        Ok(SqliteHandle { conn })
    }

    fn target(&self) -> String {
        IN_MEMORY_TARGET.to_string()
    }
}
