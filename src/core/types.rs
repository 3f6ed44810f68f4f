// ユーザーレコードと操作結果のデータ型定義

use super::error::UserStoreError;
use serde::{Deserialize, Serialize};

/// 1件のユーザーレコード
///
/// JSONのフィールド順は `id`, `email`, `age` で固定される。
/// `email`と`age`は省略時に既定値で補われるが、`id`は必須。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: i64,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}

/// 変更系操作（add/remove）の結果
///
/// `bytes`は常にコレクション全体のシリアライズ結果。
/// `rejection`がある場合、`bytes`は変更前のコレクションであり永続化してはならない。
#[derive(Debug)]
pub struct MutationOutcome {
    pub bytes: Vec<u8>,
    pub rejection: Option<UserStoreError>,
}

impl MutationOutcome {
    /// 変更が適用された結果
    pub fn applied(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            rejection: None,
        }
    }

    /// 変更が拒否された結果
    pub fn rejected(bytes: Vec<u8>, rejection: UserStoreError) -> Self {
        Self {
            bytes,
            rejection: Some(rejection),
        }
    }

    pub fn is_applied(&self) -> bool {
        self.rejection.is_none()
    }
}
