// ABOUTME: Read-only key-value store port consumed by the status repository.
// ABOUTME: Exports the KvRead trait plus in-memory and file-backed stores.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use bytes::Bytes;

/// A single record returned by a store read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvPair {
    pub key: String,
    pub value: Bytes,
}

impl KvPair {
    pub fn new(key: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Point reads against a key-value store.
///
/// A read either returns the whole record, `None` when no record exists, or
/// an error. Implementations must not return partial values.
#[async_trait]
pub trait KvRead: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<KvPair>, StoreError>;
}

#[async_trait]
impl<T: KvRead + ?Sized> KvRead for std::sync::Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<KvPair>, StoreError> {
        (**self).get(key).await
    }
}

/// Errors from store reads.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("invalid store key {0:?}")]
    InvalidKey(String),

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
}
