use super::write_output;
use crate::core::StoreResult;
use crate::storage::StorageBackend;
use crate::store::RecordStore;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// ユーザーを追加して書き戻す
///
/// IDが重複していた場合はメッセージを出力し、ファイルには触れない。
/// 成功時は何も出力しない。
pub fn execute_add<S, W>(
    store: &RecordStore<S>,
    file: &Path,
    item: &str,
    writer: &mut W,
) -> StoreResult<()>
where
    S: StorageBackend,
    W: Write,
{
    let outcome = store.add(file, item)?;
    match outcome.rejection {
        Some(rejection) => {
            warn!(%rejection, "add rejected, file left unchanged");
            write_output(writer, rejection.to_string().as_bytes())
        }
        None => store.persist(file, &outcome.bytes),
    }
}
