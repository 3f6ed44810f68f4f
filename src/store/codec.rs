// JSONエンコード・デコードのヘルパー
// 失敗はすべて致命的エラーとして呼び出し元へ伝播する

use crate::core::{StoreResult, User, UserStoreError};
use std::path::Path;

/// JSONの`null`は空のコレクションとして扱う
pub fn decode_users(bytes: &[u8], path: &Path) -> StoreResult<Vec<User>> {
    serde_json::from_slice::<Option<Vec<User>>>(bytes)
        .map(Option::unwrap_or_default)
        .map_err(|e| UserStoreError::decode(path.display().to_string(), e))
}

pub fn decode_user(item: &str) -> StoreResult<User> {
    serde_json::from_str(item).map_err(|e| UserStoreError::decode("-item", e))
}

pub fn encode_users(users: &[User]) -> StoreResult<Vec<u8>> {
    serde_json::to_vec(users).map_err(UserStoreError::encode)
}

pub fn encode_user(user: &User) -> StoreResult<Vec<u8>> {
    serde_json::to_vec(user).map_err(UserStoreError::encode)
}
