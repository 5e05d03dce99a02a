use crate::ports::outbound::LibraryRuntime;
use crate::shared::error::AppError;
use crate::shared::Result;
use rustls::crypto::CryptoProvider;
use std::sync::atomic::{AtomicBool, Ordering};

/// RustlsRuntime adapter for process-wide TLS state
///
/// Installs the ring-backed rustls crypto provider as the process default.
/// rustls keeps the provider for the rest of the process, so `teardown` only
/// clears this runtime's own state.
#[derive(Debug, Default)]
pub struct RustlsRuntime {
    initialized: AtomicBool,
}

impl RustlsRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }
}

impl LibraryRuntime for RustlsRuntime {
    fn initialize(&self) -> Result<()> {
        if CryptoProvider::get_default().is_none()
            && rustls::crypto::ring::default_provider()
                .install_default()
                .is_err()
        {
            // Another thread installed a provider in between; that one is kept
            log::debug!("rustls crypto provider was installed concurrently");
        }

        if CryptoProvider::get_default().is_none() {
            return Err(AppError::RuntimeInit {
                details: "no process-wide rustls crypto provider is available".to_string(),
                hint: "Ensure the ring crypto backend is compiled in".to_string(),
            }
            .into());
        }

        self.initialized.store(true, Ordering::SeqCst);
        log::debug!("TLS runtime initialized");
        Ok(())
    }

    fn teardown(&self) {
        if self.initialized.swap(false, Ordering::SeqCst) {
            log::debug!("TLS runtime torn down");
        }
    }
}
