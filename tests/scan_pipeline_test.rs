//! スキャンJSONの取り込み〜レポート生成までの結合テスト
//!
//! バックエンドが返す形のJSON（旧キー名のAI提案を含む）を
//! パースし、集計とレポートが期待通りになることを検証

use sharprender::report;
use sharprender_common::{
    derive_format_distribution, derive_scatter_series, derive_summary, effective_aggregations,
    Scan,
};

const SCAN_JSON: &str = r#"{
    "scan_id": "b2f1c3a0",
    "url": "https://example.com",
    "created_at": "2025-01-15T10:00:00Z",
    "images": [
        {
            "src": "https://example.com/assets/hero.png",
            "alt": "ヒーロー画像",
            "width": 1200,
            "height": 630,
            "format": "image/png",
            "size": 107806,
            "network": {
                "request_id": "req-1",
                "status": 200,
                "mime_type": "image/png",
                "protocol": "h2",
                "load_time": 0.05,
                "response_headers": {
                    "x-cache": "HIT",
                    "content-length": "107806"
                }
            },
            "ai_recommendation": {
                "formatrecommendations": "WebPへの変換を検討してください",
                "resizerecommendations": "表示サイズに合わせて縮小できます"
            }
        },
        {
            "src": "https://example.com/assets/logo.jpg",
            "alt": "",
            "width": 200,
            "height": 80,
            "format": "image/jpeg",
            "size": 51200,
            "network": {
                "request_id": "req-2",
                "status": 200,
                "mime_type": "image/jpeg",
                "protocol": "http/1.1",
                "load_time": 0.15
            }
        },
        {
            "src": "https://example.com/assets/tracker.gif",
            "alt": "tracker",
            "width": 1,
            "height": 1,
            "format": "image/gif",
            "network": {
                "request_id": "req-3",
                "status": 200,
                "mime_type": "image/gif",
                "protocol": "http/1.1"
            }
        }
    ],
    "aggregations": {
        "imageCount": 3,
        "avgLoadTime": 100.0,
        "avgSize": 77.65,
        "totalSize": 159006,
        "formatDistribution": {"png": 1, "jpeg": 1, "gif": 1}
    }
}"#;

#[test]
fn test_scan_json_roundtrip() {
    let scan = Scan::from_json(SCAN_JSON).expect("デシリアライズ失敗");
    assert_eq!(scan.scan_id, "b2f1c3a0");
    assert_eq!(scan.images.len(), 3);

    // 旧キー名のAI提案も読める
    let reco = &scan.images[0].ai_recommendation;
    assert!(reco.format_recommendations.contains("WebP"));
    assert_eq!(reco.entries().len(), 2);
}

#[test]
fn test_summary_uses_only_valid_records() {
    let scan = Scan::from_json(SCAN_JSON).expect("デシリアライズ失敗");
    let summary = derive_summary(&scan.images);

    assert_eq!(summary.count, 3);
    // load_timeを持つのは2枚: (0.05 + 0.15) / 2 * 1000 = 100 ms
    assert_eq!(summary.avg_load_time_ms, 100.0);
    // sizeを持つのは2枚: (107806 + 51200) / 2 / 1024 = 77.64 KB
    assert_eq!(summary.avg_size_kb, 77.64);
}

#[test]
fn test_distribution_order_and_total() {
    let scan = Scan::from_json(SCAN_JSON).expect("デシリアライズ失敗");
    let aggregations = effective_aggregations(&scan);
    let shares =
        derive_format_distribution(&aggregations.format_distribution, aggregations.image_count);

    // JSONの出現順を保ち、ラベルは表示用に大文字化される
    let labels: Vec<&str> = shares.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["PNG", "JPEG", "GIF"]);

    let total: u32 = shares.iter().map(|s| s.count).sum();
    assert_eq!(total, aggregations.image_count);
}

#[test]
fn test_scatter_excludes_incomplete_records() {
    let scan = Scan::from_json(SCAN_JSON).expect("デシリアライズ失敗");
    let points = derive_scatter_series(&scan.images);

    // tracker.gifはsize欠落のため除外
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].file_name, "hero.png");
    assert_eq!(points[0].file_size_kb, 105.28);
    assert_eq!(points[0].load_time_ms, 50.0);
}

#[test]
fn test_report_renders_full_scan() {
    let scan = Scan::from_json(SCAN_JSON).expect("デシリアライズ失敗");
    let report = report::render_report(&scan);

    assert!(report.contains("https://example.com"));
    assert!(report.contains("画像数: 3"));
    assert!(report.contains("PNG"));
    // altが空でもsrcからファイル名を出す
    assert!(report.contains("logo.jpg"));
    // サイズ欠落のtracker.gifはテーブルに出ない
    assert!(!report.contains("tracker.gif"));
}
