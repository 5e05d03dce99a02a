/// Filesystem adapters
mod working_directory;

pub use working_directory::ProcessWorkingDirectory;
