/// Result alias used by every port, adapter and service in the crate.
///
/// Typed failures are `AppError` values carried inside the `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
