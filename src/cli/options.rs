// 1回の起動分の不変な実行オプション
// コマンドライン引数から組み立て、ディスパッチャへ値として渡す

use super::args::Cli;
use crate::core::{StoreResult, UserStoreError};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_FILE_NAME: &str = "user.json";

/// ディスパッチャが実行する操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    FindById,
    Remove,
}

impl Operation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Add => "add",
            Self::FindById => "findById",
            Self::Remove => "remove",
        }
    }
}

impl FromStr for Operation {
    type Err = UserStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "add" => Ok(Self::Add),
            "findById" => Ok(Self::FindById),
            "remove" => Ok(Self::Remove),
            other => Err(UserStoreError::unknown_operation(other)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 実行オプション
///
/// 空文字列は「指定なし」として扱う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    operation: String,
    file_name: String,
    item: String,
    id: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            operation: String::new(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            item: String::new(),
            id: String::new(),
        }
    }
}

impl Options {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            ..Self::default()
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = item.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// 操作名を検証して取得
    pub fn operation(&self) -> StoreResult<Operation> {
        if self.operation.is_empty() {
            return Err(UserStoreError::missing_argument("operation"));
        }
        self.operation.parse()
    }

    pub fn file_name(&self) -> StoreResult<&Path> {
        require(&self.file_name, "fileName").map(Path::new)
    }

    pub fn item(&self) -> StoreResult<&str> {
        require(&self.item, "item")
    }

    pub fn id(&self) -> StoreResult<&str> {
        require(&self.id, "id")
    }
}

fn require<'a>(value: &'a str, flag: &'static str) -> StoreResult<&'a str> {
    if value.is_empty() {
        Err(UserStoreError::missing_argument(flag))
    } else {
        Ok(value)
    }
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Self {
            operation: cli.operation.unwrap_or_default(),
            file_name: cli.file_name,
            item: cli.item.unwrap_or_default(),
            id: cli.id.unwrap_or_default(),
        }
    }
}
