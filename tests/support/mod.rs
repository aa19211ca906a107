// ABOUTME: Test support utilities.
// ABOUTME: Provides tracing setup and store doubles for integration tests.

use async_trait::async_trait;
use depstat::store::{KvPair, KvRead, StoreError};
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("depstat=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Store whose every read fails, simulating an unreachable backend.
#[allow(dead_code)]
pub struct UnreachableStore {
    pub reason: String,
    reads: AtomicUsize,
}

#[allow(dead_code)]
impl UnreachableStore {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KvRead for UnreachableStore {
    async fn get(&self, _key: &str) -> Result<Option<KvPair>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}
