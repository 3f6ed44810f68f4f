// ユーザーストア用のカスタムエラー型定義
// 検証エラー・業務エラー・致命的エラーを一つの列挙型で扱う

use std::path::{Path, PathBuf};
use thiserror::Error;

/// ユーザーストア固有のエラー型
#[derive(Error, Debug)]
pub enum UserStoreError {
    #[error("-{flag} flag has to be specified")]
    MissingArgument { flag: &'static str },

    #[error("Operation {operation} not allowed!")]
    UnknownOperation { operation: String },

    #[error("Item with id {id} already exists")]
    DuplicateId { id: String },

    #[error("Item with id {id} not found")]
    NotFound { id: String },

    #[error("file I/O failed: {} - {source}", .path.display())]
    FatalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {context}: {source}")]
    FatalDecode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode users: {source}")]
    FatalEncode {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write output: {source}")]
    FatalOutput {
        #[source]
        source: std::io::Error,
    },
}

impl UserStoreError {
    /// 必須引数不足エラーの作成
    pub fn missing_argument(flag: &'static str) -> Self {
        Self::MissingArgument { flag }
    }

    /// 未知の操作エラーの作成
    pub fn unknown_operation(operation: impl Into<String>) -> Self {
        Self::UnknownOperation {
            operation: operation.into(),
        }
    }

    /// ID重複エラーの作成
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// ID未発見エラーの作成
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// I/Oエラーの作成
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FatalIo {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// デコードエラーの作成
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::FatalDecode {
            context: context.into(),
            source,
        }
    }

    /// エンコードエラーの作成
    pub fn encode(source: serde_json::Error) -> Self {
        Self::FatalEncode { source }
    }

    /// 出力先への書き込みエラーの作成
    pub fn output(source: std::io::Error) -> Self {
        Self::FatalOutput { source }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateId { .. } | Self::NotFound { .. } => ErrorSeverity::Low,
            Self::MissingArgument { .. } | Self::UnknownOperation { .. } => ErrorSeverity::High,
            Self::FatalIo { .. }
            | Self::FatalDecode { .. }
            | Self::FatalEncode { .. }
            | Self::FatalOutput { .. } => ErrorSeverity::Critical,
        }
    }

    /// プロセスを即座に終了させるべきI/O・JSONエラーか
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::FatalIo { .. }
                | Self::FatalDecode { .. }
                | Self::FatalEncode { .. }
                | Self::FatalOutput { .. }
        )
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument { .. } | Self::UnknownOperation { .. } => 2,
            Self::DuplicateId { .. } | Self::NotFound { .. } => 0,
            Self::FatalIo { .. }
            | Self::FatalDecode { .. }
            | Self::FatalEncode { .. }
            | Self::FatalOutput { .. } => 1,
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 低重要度 - 出力先へのメッセージのみ
    Low,
    /// 高重要度 - 入力の修正が必要
    High,
    /// 致命的 - プロセス終了
    Critical,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// ストア操作の結果型
pub type StoreResult<T> = std::result::Result<T, UserStoreError>;
