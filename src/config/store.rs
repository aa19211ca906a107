// ABOUTME: Store section of depstat.yml.
// ABOUTME: Points the file-backed key-value store at its root directory.

use crate::store::FileStore;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Root directory of the file-backed store.
    pub root: PathBuf,
}

impl StoreConfig {
    /// Anchor a relative root at `base`; absolute roots are left alone.
    pub(super) fn rebase(&mut self, base: &Path) {
        if self.root.is_relative() {
            self.root = base.join(&self.root);
        }
    }

    pub fn open(&self) -> FileStore {
        FileStore::new(&self.root)
    }
}
