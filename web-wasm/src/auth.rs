//! 外部IDプロバイダ連携
//!
//! ログイン状態の取得はホストページ側のJS(auth.js)に委譲し、
//! ここではユーザー情報を受け取るだけにする

use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/auth.js")]
extern "C" {
    #[wasm_bindgen(js_name = "currentUser", catch)]
    async fn current_user_js() -> Result<JsValue, JsValue>;
}

/// プロバイダから渡されるユーザー情報
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// 現在のログインユーザーを取得する（未ログインはNone）
pub async fn current_user() -> Option<UserIdentity> {
    let value = current_user_js().await.ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value(value).ok()
}
