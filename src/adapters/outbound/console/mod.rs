/// Console adapters
mod stdout_reporter;

pub use stdout_reporter::StdoutReporter;
