//! スキャン対象URLの正規化と検証
//!
//! フォーム/CLIに入力されたURLを送信前に整える

use crate::error::{Error, Result};
use url::Url;

/// 入力をhttps://付きの絶対URL文字列へ正規化する
///
/// すでにhttp(s)://で始まる場合はそのまま返す。
/// それ以外（www.始まりを含む）は一律でhttps://を前置する
pub fn format_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        return input.to_string();
    }
    format!("https://{}", input)
}

/// 絶対URLとしてパースでき、かつスキームがhttp/httpsか判定する
///
/// パース失敗は常にfalse（呼び出し側へpanicさせない）
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// 正規化と検証をまとめて行う
///
/// 検証に失敗した場合は送信をブロックするためのエラーを返す
pub fn normalize_url(input: &str) -> Result<String> {
    let formatted = format_url(input.trim());
    if is_valid_url(&formatted) {
        Ok(formatted)
    } else {
        Err(Error::InvalidUrl(input.to_string()))
    }
}
