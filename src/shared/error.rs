use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Component failures (database, compression, HTTP client) are reported
/// and never change the exit code; only startup problems do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the run completed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable config, runtime initialization failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Can't open database: {details}\nTarget: {target}\n\n💡 Hint: The bundled SQLite engine could not allocate a connection")]
    DatabaseOpen { target: String, details: String },

    #[error("Compression of {input_len} bytes failed: {details}\n\n💡 Hint: The output did not fit within the {bound}-byte bound")]
    Compression {
        input_len: usize,
        bound: usize,
        details: String,
    },

    #[error("Failed to initialize HTTP client: {details}\n\n💡 Hint: Check the TLS configuration and system certificate store")]
    HttpClientInit { details: String },

    #[error("Failed to initialize process runtime: {details}\n\n💡 Hint: {hint}")]
    RuntimeInit { details: String, hint: String },

    #[error("Failed to resolve current directory: {details}\n\n💡 Hint: The working directory may have been removed")]
    WorkingDirectory { details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
