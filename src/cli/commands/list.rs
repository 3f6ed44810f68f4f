use super::write_output;
use crate::core::StoreResult;
use crate::storage::StorageBackend;
use crate::store::RecordStore;
use std::io::Write;
use std::path::Path;

/// コレクション全体を出力する。空ファイルなら何も書かない。
pub fn execute_list<S, W>(store: &RecordStore<S>, file: &Path, writer: &mut W) -> StoreResult<()>
where
    S: StorageBackend,
    W: Write,
{
    let listing = store.list(file)?;
    if !listing.is_empty() {
        write_output(writer, &listing)?;
    }
    Ok(())
}
