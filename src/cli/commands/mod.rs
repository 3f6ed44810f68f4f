// コマンドディスパッチャ
// 操作名を検証し、対応するレコードストア操作を1回だけ呼び出す

pub mod add;
pub mod find_by_id;
pub mod list;
pub mod remove;

pub use add::*;
pub use find_by_id::*;
pub use list::*;
pub use remove::*;

use super::options::{Operation, Options};
use crate::core::{StoreResult, UserStoreError};
use crate::storage::StorageBackend;
use crate::store::RecordStore;
use std::io::Write;
use tracing::debug;

/// オプションに従って1つの操作を実行し、結果を`writer`へ書く
///
/// 引数の検証はファイルへアクセスする前に行う。
/// ID重複・ID未発見はメッセージとして`writer`へ書かれ、`Ok`が返る。
pub fn perform<S, W>(options: &Options, store: &RecordStore<S>, writer: &mut W) -> StoreResult<()>
where
    S: StorageBackend,
    W: Write,
{
    let operation = options.operation()?;
    let file = options.file_name()?;
    debug!(%operation, file = %file.display(), "dispatching");

    match operation {
        Operation::List => execute_list(store, file, writer),
        Operation::Add => {
            let item = options.item()?;
            execute_add(store, file, item, writer)
        }
        Operation::FindById => {
            let id = options.id()?;
            execute_find_by_id(store, file, id, writer)
        }
        Operation::Remove => {
            let id = options.id()?;
            execute_remove(store, file, id, writer)
        }
    }
}

pub(crate) fn write_output<W: Write>(writer: &mut W, bytes: &[u8]) -> StoreResult<()> {
    writer.write_all(bytes).map_err(UserStoreError::output)
}
