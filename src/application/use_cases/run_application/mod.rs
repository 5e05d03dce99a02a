use crate::application::dto::{RunRequest, RunResponse};
use crate::application::services::{DataProcessor, NetworkClient, RuntimeGuard};
use crate::ports::inbound::ApplicationRunPort;
use crate::ports::outbound::{
    Compressor, DatabaseConnector, EventReporter, HttpClientFactory, LibraryRuntime,
    WorkingDirectory,
};
use crate::shared::Result;
use std::path::PathBuf;

/// RunApplicationUseCase - the application's single, linear run
///
/// Prints the banner, brings up process-wide library state, reports the
/// working directory, builds the network client and the processor, and
/// processes one input. Teardown happens in reverse order when the run
/// returns.
///
/// # Type Parameters
/// * `RT` - LibraryRuntime implementation
/// * `WD` - WorkingDirectory implementation
/// * `HF` - HttpClientFactory implementation
/// * `DC` - DatabaseConnector implementation
/// * `C` - Compressor implementation
/// * `R` - EventReporter implementation
pub struct RunApplicationUseCase<RT, WD, HF, DC, C, R> {
    runtime: RT,
    working_directory: WD,
    http_client_factory: HF,
    database_connector: DC,
    compressor: C,
    reporter: R,
}

impl<RT, WD, HF, DC, C, R> RunApplicationUseCase<RT, WD, HF, DC, C, R>
where
    RT: LibraryRuntime,
    WD: WorkingDirectory,
    HF: HttpClientFactory + Clone,
    DC: DatabaseConnector,
    C: Compressor + Clone,
    R: EventReporter,
{
    /// Creates a new RunApplicationUseCase with injected dependencies
    pub fn new(
        runtime: RT,
        working_directory: WD,
        http_client_factory: HF,
        database_connector: DC,
        compressor: C,
        reporter: R,
    ) -> Self {
        Self {
            runtime,
            working_directory,
            http_client_factory,
            database_connector,
            compressor,
            reporter,
        }
    }

    /// Executes one application run
    ///
    /// # Errors
    /// Returns an error only if the process runtime fails to initialize
    pub fn execute(&self, request: RunRequest) -> Result<RunResponse> {
        let version = env!("CARGO_PKG_VERSION").to_string();
        self.reporter
            .report(&format!("SBOM Test Application v{}", version));

        // Dropped last, after both components
        let _runtime = RuntimeGuard::acquire(&self.runtime)?;

        let current_dir = self.report_current_dir();

        let mut client = NetworkClient::new(self.http_client_factory.clone(), &self.reporter);
        if let Err(e) = client.initialize() {
            log::warn!("continuing without HTTP client: {:#}", e);
        }

        let processor = DataProcessor::new(
            &self.database_connector,
            self.compressor.clone(),
            &self.reporter,
        );
        let summary = processor.process(&request.input);

        Ok(RunResponse {
            version,
            current_dir,
            http_client_ready: client.is_initialized(),
            database_connected: processor.is_connected(),
            summary,
        })
    }

    /// Reports the working directory; a failure is reported and skipped
    fn report_current_dir(&self) -> Option<PathBuf> {
        match self.working_directory.current_dir() {
            Ok(dir) => {
                self.reporter
                    .report(&format!("Current directory: {}", dir.display()));
                Some(dir)
            }
            Err(e) => {
                let message = e.to_string();
                self.reporter
                    .report_error(message.lines().next().unwrap_or_default());
                None
            }
        }
    }
}

impl<RT, WD, HF, DC, C, R> ApplicationRunPort for RunApplicationUseCase<RT, WD, HF, DC, C, R>
where
    RT: LibraryRuntime,
    WD: WorkingDirectory,
    HF: HttpClientFactory + Clone,
    DC: DatabaseConnector,
    C: Compressor + Clone,
    R: EventReporter,
{
    fn run(&self, request: RunRequest) -> Result<RunResponse> {
        self.execute(request)
    }
}
