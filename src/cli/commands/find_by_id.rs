use super::write_output;
use crate::core::StoreResult;
use crate::storage::StorageBackend;
use crate::store::RecordStore;
use std::io::Write;
use std::path::Path;

/// 一致したユーザーを出力する。見つからなければ出力は空。
pub fn execute_find_by_id<S, W>(
    store: &RecordStore<S>,
    file: &Path,
    id: &str,
    writer: &mut W,
) -> StoreResult<()>
where
    S: StorageBackend,
    W: Write,
{
    let found = store.find_by_id(file, id)?;
    write_output(writer, &found)
}
