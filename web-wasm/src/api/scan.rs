//! スキャンAPI連携
//!
//! バックエンドのHTTP JSON APIを叩く薄いラッパー:
//! - POST /scan             スキャン登録
//! - GET  /scan/{id}        スキャン結果取得
//! - GET  /scan/history     スキャン履歴取得
//!
//! リトライやキャンセルは行わず、失敗はそのままエラーメッセージ
//! として呼び出し側へ返す

use sharprender_common::{Scan, ScanCreated, ScanHistoryResponse, SubmitScanRequest};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// APIベースURL（ビルド時に環境変数で差し替え可能）
const API_BASE_URL: &str = match option_env!("SHARPRENDER_API_BASE") {
    Some(base) => base,
    None => "http://localhost:8080",
};

/// fetch実行とJSON取り出しの共通処理
async fn fetch_json(request: Request) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    JsFuture::from(resp.json()?).await
}

fn get_request(url: &str) -> Result<Request, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    Request::new_with_str_and_init(url, &opts)
}

fn post_json_request(url: &str, body: &str) -> Result<Request, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    Ok(request)
}

/// スキャンを登録してscan_idを受け取る
///
/// 送信リクエストにはユーザーIDを明示的に添える（呼び出し側で
/// ログイン済みであることを確認してから呼ぶ）
pub async fn submit_scan(url: &str, user_id: &str) -> Result<ScanCreated, JsValue> {
    let body = serde_json::to_string(&SubmitScanRequest {
        url: url.to_string(),
        user_id: user_id.to_string(),
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let request = post_json_request(&format!("{}/scan", API_BASE_URL), &body)?;

    let json = fetch_json(request).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// スキャン結果を取得する
pub async fn get_scan(scan_id: &str) -> Result<Scan, JsValue> {
    let request = get_request(&format!("{}/scan/{}", API_BASE_URL, scan_id))?;
    let json = fetch_json(request).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// ユーザーのスキャン履歴を取得する
pub async fn get_scan_history(user_id: &str) -> Result<Vec<Scan>, JsValue> {
    let encoded = js_sys::encode_uri_component(user_id);
    let request = get_request(&format!("{}/scan/history?user_id={}", API_BASE_URL, encoded))?;
    let json = fetch_json(request).await?;

    let response: ScanHistoryResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(response.scans)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_get_request_is_well_formed() {
        let request = get_request("http://localhost:8080/scan/abc").expect("リクエスト構築失敗");
        assert_eq!(request.method(), "GET");
        assert_eq!(request.url(), "http://localhost:8080/scan/abc");
    }

    #[wasm_bindgen_test]
    fn wasm_post_request_sets_json_content_type() {
        let request = post_json_request(
            "http://localhost:8080/scan",
            r#"{"url":"https://example.com","user_id":"u1"}"#,
        )
        .expect("リクエスト構築失敗");

        assert_eq!(request.method(), "POST");
        let content_type = request.headers().get("Content-Type").expect("ヘッダ取得失敗");
        assert_eq!(content_type.as_deref(), Some("application/json"));
    }

    #[wasm_bindgen_test]
    fn wasm_history_user_id_is_uri_encoded() {
        let encoded = js_sys::encode_uri_component("user/+1");
        assert_eq!(String::from(encoded), "user%2F%2B1");
    }
}
