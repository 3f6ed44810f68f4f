// メモリ上のストレージバックエンド（テスト・組み込み用）

use super::StorageBackend;
use crate::core::{StoreResult, UserStoreError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MemoryState {
    files: HashMap<PathBuf, Vec<u8>>,
    write_count: usize,
}

/// パスごとのバイト列をメモリに保持するバックエンド
///
/// クローンは同じ内容を共有する。
#[derive(Debug, Clone, Default)]
pub struct MemoryStorageBackend {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStorageBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期内容を持つファイルを登録したバックエンドを作成
    pub fn with_file(self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        self.lock().files.insert(path.into(), data.into());
        self
    }

    /// テスト用：ファイル内容を取得
    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.lock().files.get(path).cloned()
    }

    /// テスト用：ファイルが存在するかチェック
    pub fn contains(&self, path: &Path) -> bool {
        self.lock().files.contains_key(path)
    }

    /// テスト用：write呼び出し回数
    pub fn write_count(&self) -> usize {
        self.lock().write_count
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StorageBackend for MemoryStorageBackend {
    fn ensure_exists(&self, path: &Path) -> StoreResult<()> {
        self.lock().files.entry(path.to_path_buf()).or_default();
        Ok(())
    }

    fn read(&self, path: &Path) -> StoreResult<Vec<u8>> {
        self.lock().files.get(path).cloned().ok_or_else(|| {
            UserStoreError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file in memory"),
            )
        })
    }

    fn write(&self, path: &Path, data: &[u8]) -> StoreResult<()> {
        let mut state = self.lock();
        state.files.insert(path.to_path_buf(), data.to_vec());
        state.write_count += 1;
        Ok(())
    }
}
