// レコードストア - JSONファイル全体の読み込み・変更・書き戻し
//
// 各操作は毎回ファイルを読み直す。メモリ上に状態は持たない。

pub mod codec;

use crate::core::{MutationOutcome, StoreResult, User, UserStoreError};
use crate::storage::StorageBackend;
use codec::{decode_user, decode_users, encode_user, encode_users};
use std::path::Path;
use tracing::{debug, info};

/// ストレージバックエンド上のユーザーコレクションを操作する
pub struct RecordStore<S>
where
    S: StorageBackend,
{
    storage: S,
}

impl<S> RecordStore<S>
where
    S: StorageBackend,
{
    /// 新しいストアを作成（コンストラクタインジェクション）
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// ファイルを（必要なら作成してから）読み込む
    fn load(&self, path: &Path) -> StoreResult<Vec<u8>> {
        self.storage.ensure_exists(path)?;
        self.storage.read(path)
    }

    /// ファイルの生バイト列をそのまま返す。パースはしない。
    pub fn list(&self, path: &Path) -> StoreResult<Vec<u8>> {
        self.load(path)
    }

    /// IDが一致する最初のユーザーをエンコードして返す。見つからなければ空。
    pub fn find_by_id(&self, path: &Path, id: &str) -> StoreResult<Vec<u8>> {
        let bytes = self.load(path)?;
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        let users = decode_users(&bytes, path)?;
        match users.iter().find(|user| user.id == id) {
            Some(user) => encode_user(user),
            None => {
                debug!(id, "no user matched");
                Ok(Vec::new())
            }
        }
    }

    /// ユーザーを末尾に追加したコレクションを返す
    ///
    /// 同じIDが既にあれば、変更前のコレクションと`DuplicateId`を返す。
    pub fn add(&self, path: &Path, item: &str) -> StoreResult<MutationOutcome> {
        let bytes = self.load(path)?;
        let user = decode_user(item)?;

        if bytes.is_empty() {
            info!(id = %user.id, "creating collection with first user");
            return Ok(MutationOutcome::applied(encode_users(&[user])?));
        }

        let mut users = decode_users(&bytes, path)?;
        if users.iter().any(|existing| existing.id == user.id) {
            let rejection = UserStoreError::duplicate_id(&user.id);
            return Ok(MutationOutcome::rejected(encode_users(&users)?, rejection));
        }

        info!(id = %user.id, total = users.len() + 1, "adding user");
        users.push(user);
        Ok(MutationOutcome::applied(encode_users(&users)?))
    }

    /// IDが一致する最初のユーザーを取り除いたコレクションを返す
    ///
    /// 残りの要素の順序は保たれる。見つからなければ`NotFound`。
    pub fn remove(&self, path: &Path, id: &str) -> StoreResult<MutationOutcome> {
        let bytes = self.load(path)?;
        if bytes.is_empty() {
            return Ok(MutationOutcome::rejected(
                encode_users(&[])?,
                UserStoreError::not_found(id),
            ));
        }

        let mut users: Vec<User> = decode_users(&bytes, path)?;
        match users.iter().position(|user| user.id == id) {
            Some(index) => {
                users.remove(index);
                info!(id, remaining = users.len(), "removed user");
                Ok(MutationOutcome::applied(encode_users(&users)?))
            }
            None => Ok(MutationOutcome::rejected(
                encode_users(&users)?,
                UserStoreError::not_found(id),
            )),
        }
    }

    /// コレクション全体をファイルへ書き戻す
    pub fn persist(&self, path: &Path, bytes: &[u8]) -> StoreResult<()> {
        self.storage.write(path, bytes)
    }
}
