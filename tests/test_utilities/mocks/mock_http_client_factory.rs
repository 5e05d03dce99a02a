use sbom_test_app::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Handle produced by MockHttpClientFactory; counts drops
pub struct MockHttpHandle {
    releases: Arc<AtomicUsize>,
}

impl Drop for MockHttpHandle {
    fn drop(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

/// Mock HttpClientFactory for testing
#[derive(Default, Clone)]
pub struct MockHttpClientFactory {
    pub should_fail: bool,
    pub creates: Arc<AtomicUsize>,
    pub releases: Arc<AtomicUsize>,
}

impl MockHttpClientFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn release_count(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

impl HttpClientFactory for MockHttpClientFactory {
    type Handle = MockHttpHandle;

    fn create(&self) -> Result<MockHttpHandle> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock HTTP client failure");
        }
        Ok(MockHttpHandle {
            releases: Arc::clone(&self.releases),
        })
    }
}
