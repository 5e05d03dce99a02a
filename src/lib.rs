//! sbom-test-app - a dependency showcase for SBOM tooling
//!
//! This library wires an HTTP client (reqwest), a TLS library (rustls), an
//! embedded SQL database (SQLite via rusqlite) and a compression library
//! (zlib via flate2) behind small components, so that SBOM generators have a
//! realistic dependency tree to scan.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Application Layer** (`application`): the run use case, the processor,
//!   the network client and the runtime guard
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error and result types
//! - **Config** (`config`): YAML config file loading and settings merging
//!
//! # Example
//!
//! ```no_run
//! use sbom_test_app::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = RunApplicationUseCase::new(
//!     RustlsRuntime::new(),
//!     ProcessWorkingDirectory::new(),
//!     ReqwestClientFactory::new(),
//!     SqliteConnector::in_memory(),
//!     ZlibCompressor::new(),
//!     StdoutReporter::new(),
//! );
//!
//! let response = use_case.execute(RunRequest::default())?;
//! println!("compressed to {:?} bytes", response.summary.compressed_len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::compression::{compress_bound, ZlibCompressor};
    pub use crate::adapters::outbound::console::StdoutReporter;
    pub use crate::adapters::outbound::database::{SqliteConnector, SqliteHandle};
    pub use crate::adapters::outbound::filesystem::ProcessWorkingDirectory;
    pub use crate::adapters::outbound::network::ReqwestClientFactory;
    pub use crate::adapters::outbound::tls::RustlsRuntime;
    pub use crate::application::dto::{CompressionOutcome, ProcessSummary, RunRequest, RunResponse};
    pub use crate::application::services::{DataProcessor, NetworkClient, RuntimeGuard};
    pub use crate::application::use_cases::RunApplicationUseCase;
    pub use crate::ports::inbound::ApplicationRunPort;
    pub use crate::ports::outbound::{
        Compressor, DatabaseConnector, DatabaseHandle, EventReporter, HttpClientFactory,
        LibraryRuntime, WorkingDirectory,
    };
    pub use crate::shared::Result;
}
