// コアレイヤー - エラー定義とデータ型
// 他のレイヤーから参照される基本的な型を提供

pub mod error;
pub mod types;

// 公開API
pub use error::{ErrorSeverity, StoreResult, UserStoreError};
pub use types::{MutationOutcome, User};
