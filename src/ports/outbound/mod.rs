/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external libraries (database engine, compression,
/// HTTP client, TLS runtime, file system, console).
pub mod compressor;
pub mod database_connector;
pub mod event_reporter;
pub mod http_client_factory;
pub mod library_runtime;
pub mod working_directory;

pub use compressor::Compressor;
pub use database_connector::{DatabaseConnector, DatabaseHandle};
pub use event_reporter::EventReporter;
pub use http_client_factory::HttpClientFactory;
pub use library_runtime::LibraryRuntime;
pub use working_directory::WorkingDirectory;
