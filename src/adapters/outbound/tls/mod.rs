/// Process-wide TLS runtime adapters
mod rustls_runtime;

pub use rustls_runtime::RustlsRuntime;
