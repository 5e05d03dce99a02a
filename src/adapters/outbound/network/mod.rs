/// Network adapters for HTTP client handles
mod reqwest_client_factory;

pub use reqwest_client_factory::{ReqwestClientFactory, DEFAULT_HTTP_TIMEOUT_SECS};
