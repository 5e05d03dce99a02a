/// Embedded database adapters
mod sqlite_connector;

pub use sqlite_connector::{SqliteConnector, SqliteHandle};
