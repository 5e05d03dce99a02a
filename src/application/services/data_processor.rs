use crate::application::dto::ProcessSummary;
use crate::ports::outbound::{Compressor, DatabaseConnector, DatabaseHandle, EventReporter};
use crate::shared::Result;

/// DataProcessor - owns one database connection and compresses input
///
/// The connection is opened on construction and released exactly once when
/// the processor is dropped. A failed open is reported and the processor is
/// still usable: compression does not depend on the database.
///
/// # Type Parameters
/// * `H` - DatabaseHandle held for the processor's lifetime
/// * `C` - Compressor implementation
/// * `R` - EventReporter implementation
pub struct DataProcessor<H: DatabaseHandle, C, R> {
    connection: Option<H>,
    open_error: Option<String>,
    compressor: C,
    reporter: R,
}

impl<H, C, R> DataProcessor<H, C, R>
where
    H: DatabaseHandle,
    C: Compressor,
    R: EventReporter,
{
    /// Opens a database connection and builds the processor
    ///
    /// Open failures are reported through `reporter` and recorded; they
    /// never abort construction.
    pub fn new<D>(connector: &D, compressor: C, reporter: R) -> Self
    where
        D: DatabaseConnector<Handle = H>,
    {
        let (connection, open_error) = match connector.open() {
            Ok(handle) => {
                reporter.report("SQLite database opened successfully");
                (Some(handle), None)
            }
            Err(e) => {
                let message = e.to_string();
                let first_line = message.lines().next().unwrap_or_default();
                let first_line = first_line
                    .strip_prefix("Can't open database: ")
                    .unwrap_or(first_line);
                reporter.report_error(&format!("Can't open database: {}", first_line));
                log::warn!("database {} unavailable: {:#}", connector.target(), e);
                (None, Some(message))
            }
        };

        Self {
            connection,
            open_error,
            compressor,
            reporter,
        }
    }

    /// Whether the processor holds an open connection
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// The error recorded when the connection failed to open
    pub fn open_error(&self) -> Option<&str> {
        self.open_error.as_deref()
    }

    /// Reports the input, compresses it and reports the size change
    pub fn process(&self, input: &str) -> ProcessSummary {
        self.reporter.report(&format!("Processing data: {}", input));

        let bound = self.compressor.bound(input.len());
        match self.compress(input) {
            Ok(compressed) => {
                self.reporter.report(&format!(
                    "Compressed {} bytes to {} bytes",
                    input.len(),
                    compressed.len()
                ));
                ProcessSummary::compressed(input.len(), bound, compressed.len())
            }
            Err(e) => {
                let reason = e.to_string();
                self.reporter
                    .report_error(reason.lines().next().unwrap_or_default());
                ProcessSummary::failed(input.len(), bound, reason)
            }
        }
    }

    /// Compresses `input` within the compressor's worst-case bound
    ///
    /// # Errors
    /// Returns an error if the compressed stream does not fit the bound
    pub fn compress(&self, input: &str) -> Result<Vec<u8>> {
        self.compressor.compress(input.as_bytes())
    }
}

impl<H: DatabaseHandle, C, R> Drop for DataProcessor<H, C, R> {
    fn drop(&mut self) {
        if let Some(connection) = self.connection.take() {
            if let Err(e) = connection.close() {
                log::warn!("{:#}", e);
            }
        }
    }
}
