/// Mock implementations for testing
mod mock_database_connector;
mod mock_event_reporter;
mod mock_http_client_factory;
mod mock_library_runtime;

pub use mock_database_connector::MockDatabaseConnector;
pub use mock_event_reporter::MockEventReporter;
pub use mock_http_client_factory::MockHttpClientFactory;
pub use mock_library_runtime::MockLibraryRuntime;
