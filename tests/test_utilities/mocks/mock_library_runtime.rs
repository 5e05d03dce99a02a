use sbom_test_app::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock LibraryRuntime for testing that counts init/teardown calls
#[derive(Default, Clone)]
pub struct MockLibraryRuntime {
    pub should_fail: bool,
    pub inits: Arc<AtomicUsize>,
    pub teardowns: Arc<AtomicUsize>,
}

impl MockLibraryRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn init_count(&self) -> usize {
        self.inits.load(Ordering::SeqCst)
    }

    pub fn teardown_count(&self) -> usize {
        self.teardowns.load(Ordering::SeqCst)
    }
}

impl LibraryRuntime for MockLibraryRuntime {
    fn initialize(&self) -> Result<()> {
        self.inits.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock runtime initialization failure");
        }
        Ok(())
    }

    fn teardown(&self) {
        self.teardowns.fetch_add(1, Ordering::SeqCst);
    }
}
