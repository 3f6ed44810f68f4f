// CLI層 - コマンドライン引数の定義と処理
// ユーザーインターフェースとレコードストアの橋渡し

pub mod args;
pub mod commands;
pub mod options;

// 公開API
pub use args::*;
pub use commands::*;
pub use options::*;
