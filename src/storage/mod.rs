use crate::core::StoreResult;
use mockall::automock;
use std::path::Path;

pub mod local;
pub mod memory;

/// ストレージバックエンドのトレイト
///
/// レコードストアはファイル全体をバイト列として読み書きするだけなので、
/// バックエンドが提供するのはこの3操作のみ。
#[automock]
pub trait StorageBackend {
    /// ファイルが存在しなければ空で作成する（既存の内容には触れない）
    fn ensure_exists(&self, path: &Path) -> StoreResult<()>;

    /// ファイル全体を読み込む
    fn read(&self, path: &Path) -> StoreResult<Vec<u8>>;

    /// ファイル全体を上書きする
    fn write(&self, path: &Path, data: &[u8]) -> StoreResult<()>;
}
