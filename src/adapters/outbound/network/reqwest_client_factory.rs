use crate::ports::outbound::HttpClientFactory;
use crate::shared::error::AppError;
use crate::shared::Result;
use std::time::Duration;

/// Request timeout used when none is configured
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// ReqwestClientFactory adapter for building blocking reqwest clients
///
/// Each created client owns its own connection pool and TLS configuration;
/// dropping it releases both.
#[derive(Debug, Clone)]
pub struct ReqwestClientFactory {
    timeout: Duration,
    user_agent: String,
}

impl ReqwestClientFactory {
    /// Creates a factory with default configuration
    pub fn new() -> Self {
        let version = env!("CARGO_PKG_VERSION");
        Self {
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: format!("sbom-test-app/{}", version),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for ReqwestClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClientFactory for ReqwestClientFactory {
    type Handle = reqwest::blocking::Client;

    fn create(&self) -> Result<reqwest::blocking::Client> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(|e| AppError::HttpClientInit {
                details: e.to_string(),
            })?;

        log::debug!(
            "built HTTP client (user agent {}, timeout {:?})",
            self.user_agent,
            self.timeout
        );

        Ok(client)
    }
}
