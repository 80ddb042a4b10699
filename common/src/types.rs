//! スキャン結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Scan: バックエンドが返す1回のスキャン結果
//! - ImageScanResult: 画像1枚ごとの計測データ
//! - Aggregations: サーバー集計（クライアント側でも再計算可能）

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 1回のスキャン結果（バックエンドのレスポンス）
///
/// フロントエンドからは不変データとして扱う。プロジェクタは
/// ここから派生値を作るだけで、Scan自体を書き換えない
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scan {
    pub scan_id: String,
    pub url: String,
    pub created_at: String,
    /// ページ上の発見順。それ以外の順序は保証されない
    pub images: Vec<ImageScanResult>,
    pub aggregations: Option<Aggregations>,
    pub metadata: Option<WebsiteMetadata>,
}

/// サーバー集計
///
/// formatDistributionは挿入順を保持する（ソートしない）。
/// 値の合計 = imageCount が不変条件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Aggregations {
    pub image_count: u32,
    /// 秒
    pub avg_load_time: f64,
    /// バイト
    pub avg_size: f64,
    pub total_size: u64,
    pub format_distribution: IndexMap<String, u32>,
}

/// スキャンされた画像1枚分のデータ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageScanResult {
    /// 画像URL。同一画像が複数回使われるとsrcは重複しうる
    pub src: String,
    pub alt: String,
    /// ピクセル。0は「不明」
    pub width: u32,
    pub height: u32,
    /// MIME文字列（例: "image/png"）
    pub format: String,
    /// バイト数。Noneは未計測、0は有効なセンチネル値
    pub size: Option<u64>,
    pub network: NetworkInfo,
    pub timing: TimingInfo,
    pub ai_recommendation: AiRecommendation,
}

/// ネットワークサブレコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkInfo {
    /// ネットワーク層のID。行キーとして使う（存在する場合）
    pub request_id: String,
    pub document_url: String,
    pub method: String,
    pub status: u16,
    pub mime_type: String,
    pub protocol: String,
    /// 読み込み時間（秒）。未計測はNone
    pub load_time: Option<f64>,
    pub request_headers: HashMap<String, String>,
    pub response_headers: HashMap<String, String>,
}

/// タイミングサブレコード（秒・バイト）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingInfo {
    pub dns_lookup: f64,
    pub connection_time: f64,
    pub ssl_time: f64,
    pub ttfb: f64,
    pub content_download_time: f64,
    pub transfer_size: u64,
    pub encoded_body_size: u64,
    pub decoded_body_size: u64,
}

/// AI最適化提案（5種類の自由記述）
///
/// データモデル改訂でキー名が揺れているため、旧キーは
/// serde aliasで現行キーへ正規化する
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiRecommendation {
    #[serde(alias = "formatrecommendations")]
    pub format_recommendations: String,
    #[serde(alias = "resizerecommendations")]
    pub resize_recommendations: String,
    #[serde(alias = "compressionrecommendations")]
    pub compression_recommendations: String,
    #[serde(alias = "cachingrecommendations")]
    pub caching_recommendations: String,
    #[serde(alias = "additionalrecommendations")]
    pub other_recommendations: String,
}

impl AiRecommendation {
    /// 表示用: 空でない提案を(ラベル, 本文)で返す
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("フォーマット", self.format_recommendations.as_str()),
            ("リサイズ", self.resize_recommendations.as_str()),
            ("圧縮", self.compression_recommendations.as_str()),
            ("キャッシュ", self.caching_recommendations.as_str()),
            ("その他", self.other_recommendations.as_str()),
        ]
        .into_iter()
        .filter(|(_, text)| !text.is_empty())
        .collect()
    }
}

impl Scan {
    /// JSON文字列からScanを復元する
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 保存用の整形済みJSONへ変換する
    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// スキャン対象サイトのメタデータ（履歴カード用）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteMetadata {
    pub title: String,
    pub description: String,
    pub favicon: String,
    pub og_image: String,
}

/// POST /scan のリクエストボディ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitScanRequest {
    pub url: String,
    pub user_id: String,
}

/// POST /scan のレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanCreated {
    pub scan_id: String,
}

/// GET /scan/history のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanHistoryResponse {
    pub scans: Vec<Scan>,
}
