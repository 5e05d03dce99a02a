/// Application services wrapping one external capability each
mod data_processor;
mod network_client;
mod runtime_guard;

pub use data_processor::DataProcessor;
pub use network_client::NetworkClient;
pub use runtime_guard::RuntimeGuard;
