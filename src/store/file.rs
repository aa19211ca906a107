// ABOUTME: File-backed key-value store rooted at a local directory.
// ABOUTME: Each key maps to a file at <root>/<key>; missing files are absent records.

use super::{KvPair, KvRead, StoreError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a key to a path under the root.
    /// Rejects keys that are absolute or contain empty, `.` or `..` segments.
    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() || key.starts_with('/') {
            return Err(StoreError::InvalidKey(key.to_string()));
        }

        let mut path = self.root.clone();
        for segment in key.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(StoreError::InvalidKey(key.to_string()));
            }
            path.push(segment);
        }
        Ok(path)
    }
}

#[async_trait]
impl KvRead for FileStore {
    async fn get(&self, key: &str) -> Result<Option<KvPair>, StoreError> {
        let path = self.path_for(key)?;

        match tokio::fs::read(&path).await {
            Ok(value) => Ok(Some(KvPair::new(key, value))),
            // A key that names a directory, or sits below a plain file, has no record.
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::NotFound | ErrorKind::IsADirectory | ErrorKind::NotADirectory
                ) =>
            {
                tracing::debug!("No record at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
