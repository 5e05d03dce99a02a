use sbom_test_app::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Handle produced by MockDatabaseConnector; counts its own release
pub struct MockDatabaseHandle {
    closes: Arc<AtomicUsize>,
}

impl DatabaseHandle for MockDatabaseHandle {
    fn close(self) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Mock DatabaseConnector for testing
#[derive(Default, Clone)]
pub struct MockDatabaseConnector {
    pub should_fail: bool,
    pub opens: Arc<AtomicUsize>,
    pub closes: Arc<AtomicUsize>,
}

impl MockDatabaseConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl DatabaseConnector for MockDatabaseConnector {
    type Handle = MockDatabaseHandle;

    fn open(&self) -> Result<MockDatabaseHandle> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Can't open database: mock open failure");
        }
        Ok(MockDatabaseHandle {
            closes: Arc::clone(&self.closes),
        })
    }

    fn target(&self) -> String {
        "mock".to_string()
    }
}
