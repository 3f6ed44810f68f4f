pub mod cli;
pub mod core;
pub mod storage;
pub mod store;

pub use crate::core::{MutationOutcome, StoreResult, User, UserStoreError};
pub use cli::{Operation, Options};
pub use store::RecordStore;

use std::io::Write;
use storage::StorageBackend;

// 依存関係を直接所有するアプリケーション構造体
// ストレージバックエンドを差し替えることでテストや別の保存先に対応する
pub struct App<S>
where
    S: StorageBackend,
{
    store: RecordStore<S>,
}

impl<S> App<S>
where
    S: StorageBackend,
{
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(storage: S) -> Self {
        Self {
            store: RecordStore::new(storage),
        }
    }

    /// 1回の起動分の操作を実行する
    pub fn run<W: Write>(&self, options: &Options, writer: &mut W) -> StoreResult<()> {
        cli::perform(options, &self.store, writer)?;
        writer.flush().map_err(UserStoreError::output)
    }
}
