use super::StorageBackend;
use crate::core::{StoreResult, UserStoreError};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::debug;

/// ローカルファイルシステム用のストレージバックエンド
#[derive(Debug, Clone)]
pub struct LocalStorageBackend;

impl Default for LocalStorageBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for LocalStorageBackend {
    fn ensure_exists(&self, path: &Path) -> StoreResult<()> {
        // appendモードで開くので既存ファイルは切り詰められない
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| UserStoreError::io(path, e))?;
        Ok(())
    }

    fn read(&self, path: &Path) -> StoreResult<Vec<u8>> {
        let data = std::fs::read(path).map_err(|e| UserStoreError::io(path, e))?;
        debug!(path = %path.display(), bytes = data.len(), "read file");
        Ok(data)
    }

    fn write(&self, path: &Path, data: &[u8]) -> StoreResult<()> {
        std::fs::write(path, data).map_err(|e| UserStoreError::io(path, e))?;
        debug!(path = %path.display(), bytes = data.len(), "wrote file");
        Ok(())
    }
}
