// ABOUTME: In-memory key-value store for tests and embedded use.
// ABOUTME: Writers populate it directly; readers go through KvRead.

use super::{KvPair, KvRead, StoreError};
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value at `key`.
    pub fn put(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.entries.write().insert(key.into(), value.into());
    }

    /// Remove `key`, returning the previous value if any.
    pub fn remove(&self, key: &str) -> Option<Bytes> {
        self.entries.write().remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl KvRead for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<KvPair>, StoreError> {
        let entries = self.entries.read();
        Ok(entries
            .get(key)
            .map(|value| KvPair::new(key, value.clone())))
    }
}
