use crate::shared::Result;
use std::path::PathBuf;

/// WorkingDirectory port for resolving the process working directory
pub trait WorkingDirectory {
    /// Returns the current working directory
    ///
    /// # Errors
    /// Returns an error if the directory cannot be resolved
    /// (e.g. it was removed while the process is running)
    fn current_dir(&self) -> Result<PathBuf>;
}
