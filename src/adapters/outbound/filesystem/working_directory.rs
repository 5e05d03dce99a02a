use crate::ports::outbound::WorkingDirectory;
use crate::shared::error::AppError;
use crate::shared::Result;
use std::path::PathBuf;

/// ProcessWorkingDirectory adapter resolving the working directory of
/// the running process
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessWorkingDirectory;

impl ProcessWorkingDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl WorkingDirectory for ProcessWorkingDirectory {
    fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().map_err(|e| {
            AppError::WorkingDirectory {
                details: e.to_string(),
            }
            .into()
        })
    }
}
