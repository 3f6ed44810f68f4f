use clap::Parser;
use std::ffi::OsString;

/// 単一ハイフンでも受け付けるロングフラグ名
const SINGLE_DASH_FLAGS: [&str; 4] = ["operation", "fileName", "item", "id"];

#[derive(Parser, Debug)]
#[command(name = "user_store")]
#[command(about = "Maintain a collection of users stored in a JSON file")]
#[command(version)]
pub struct Cli {
    /// Operation to perform: list, add, findById or remove
    #[arg(long)]
    pub operation: Option<String>,

    /// JSON file holding the user collection
    #[arg(long = "fileName", default_value = "user.json")]
    pub file_name: String,

    /// User to add, as a JSON object with id, email and age
    #[arg(long)]
    pub item: Option<String>,

    /// Identifier for findById and remove
    #[arg(long)]
    pub id: Option<String>,
}

impl Cli {
    /// プロセス引数を正規化してからパースする
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// 任意の引数列を正規化してからパースする（テスト用）
    pub fn try_parse_normalized_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// `-operation list` や `-fileName=x.json` のような単一ハイフン形式を
/// clapが解釈できる `--operation` 形式へ書き換える
///
/// 書き換えるのは既知のフラグ名のみ。フラグの値として渡されたトークンはそのまま残す。
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expecting_value = false;

    for arg in args.into_iter().map(Into::into) {
        if expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|text| {
            let body = text.strip_prefix('-')?;
            if body.starts_with('-') {
                return None;
            }
            let (name, inline_value) = match body.split_once('=') {
                Some((name, _)) => (name, true),
                None => (body, false),
            };
            SINGLE_DASH_FLAGS
                .contains(&name)
                .then(|| (format!("-{text}"), inline_value))
        });

        match rewritten {
            Some((flag, inline_value)) => {
                expecting_value = !inline_value;
                normalized.push(OsString::from(flag));
            }
            None => {
                // `--id` のような正規形も値を取る
                if let Some(name) = arg.to_str().and_then(|t| t.strip_prefix("--")) {
                    expecting_value = SINGLE_DASH_FLAGS.contains(&name);
                }
                normalized.push(arg);
            }
        }
    }

    normalized
}
