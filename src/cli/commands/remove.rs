use super::write_output;
use crate::core::StoreResult;
use crate::storage::StorageBackend;
use crate::store::RecordStore;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// ユーザーを削除し、書き戻した後のコレクションを出力する
///
/// 見つからなければメッセージのみを出力し、ファイルには触れない。
pub fn execute_remove<S, W>(
    store: &RecordStore<S>,
    file: &Path,
    id: &str,
    writer: &mut W,
) -> StoreResult<()>
where
    S: StorageBackend,
    W: Write,
{
    let outcome = store.remove(file, id)?;
    match outcome.rejection {
        Some(rejection) => {
            warn!(%rejection, "remove rejected");
            write_output(writer, rejection.to_string().as_bytes())
        }
        None => {
            store.persist(file, &outcome.bytes)?;
            write_output(writer, &outcome.bytes)
        }
    }
}
