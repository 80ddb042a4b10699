//! スキャン結果の表示用変換（CLI/WASM共通）
//!
//! ダッシュボードの各ビューが表示する派生値をScanから決定的に
//! 導出する純関数群:
//! - derive_summary: サマリーカード用の集計
//! - derive_format_distribution: 円グラフ用の系列
//! - derive_scatter_series: 散布図用の系列
//! - classify_load_time: 読み込み時間のステータス分類
//! - compute_aggregations: サーバー集計のクライアント側再計算

use crate::types::{Aggregations, ImageScanResult, Scan};
use indexmap::IndexMap;

/// サマリーカード用の集計値
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSummary {
    pub count: usize,
    /// ミリ秒、小数第2位まで
    pub avg_load_time_ms: f64,
    /// KB、小数第2位まで
    pub avg_size_kb: f64,
}

/// 読み込み時間の分類（テーブルのステータスバッジ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTimeStatus {
    Success,
    Warning,
    Error,
}

impl LoadTimeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadTimeStatus::Success => "success",
            LoadTimeStatus::Warning => "warning",
            LoadTimeStatus::Error => "error",
        }
    }
}

/// 円グラフの1区分
#[derive(Debug, Clone, PartialEq)]
pub struct FormatShare {
    /// MIMEサブタイプの大文字表記（"image/png" → "PNG"）
    pub label: String,
    pub count: u32,
    pub percent: f64,
}

impl FormatShare {
    /// グラフラベル（整数%）
    pub fn chart_label(&self) -> String {
        format!("{} ({}%)", self.label.to_lowercase(), self.percent.round() as u32)
    }

    /// ツールチップ（小数第1位%）
    pub fn tooltip_text(&self) -> String {
        format!("{}: {} ({:.1}%)", self.label, self.count, self.percent)
    }
}

/// 散布図の1点
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// request_id、なければインデックス由来の安定トークン
    pub id: String,
    pub file_name: String,
    pub file_size_kb: f64,
    pub load_time_ms: f64,
    pub format: String,
}

/// 履歴カードのステータス（データから決定的に導出する）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStatus {
    Healthy,
    Degraded,
    Failed,
}

impl HistoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryStatus::Healthy => "healthy",
            HistoryStatus::Degraded => "degraded",
            HistoryStatus::Failed => "failed",
        }
    }
}

/// 小数第2位に丸める
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// サマリーカード用の集計を導出する
///
/// load_time/sizeが未計測(None)のレコードは平均から除外する
/// （0として混ぜると平均が歪むため）。空入力はゼロ埋めで返し、
/// ゼロ除算は起こさない
pub fn derive_summary(images: &[ImageScanResult]) -> ScanSummary {
    let count = images.len();
    if count == 0 {
        return ScanSummary::default();
    }

    let mut load_time_sum = 0.0;
    let mut load_time_count = 0usize;
    let mut size_sum = 0u64;
    let mut size_count = 0usize;

    for image in images {
        if let Some(load_time) = image.network.load_time {
            load_time_sum += load_time;
            load_time_count += 1;
        }
        if let Some(size) = image.size {
            size_sum += size;
            size_count += 1;
        }
    }

    let avg_load_time_ms = if load_time_count == 0 {
        0.0
    } else {
        round2(load_time_sum / load_time_count as f64 * 1000.0)
    };

    let avg_size_kb = if size_count == 0 {
        0.0
    } else {
        round2(size_sum as f64 / size_count as f64 / 1024.0)
    };

    ScanSummary { count, avg_load_time_ms, avg_size_kb }
}

/// MIME文字列から表示用ラベルを作る（"image/png" → "PNG"）
pub fn format_label(format: &str) -> String {
    format.strip_prefix("image/").unwrap_or(format).to_uppercase()
}

/// フォーマット分布を円グラフ用の系列へ変換する
///
/// 順序は入力マップの挿入順を保持する（件数順に並べ替えない）
pub fn derive_format_distribution(
    format_distribution: &IndexMap<String, u32>,
    total_images: u32,
) -> Vec<FormatShare> {
    format_distribution
        .iter()
        .map(|(format, &count)| {
            let percent = if total_images == 0 {
                0.0
            } else {
                count as f64 / total_images as f64 * 100.0
            };
            FormatShare { label: format_label(format), count, percent }
        })
        .collect()
}

/// srcの最後の非空パスセグメントをファイル名として返す
///
/// セグメントがなければaltへ、altも空なら"unknown"へフォールバック
pub fn file_name_from_src(src: &str, alt: &str) -> String {
    if let Some(segment) = src.split('/').rev().find(|s| !s.is_empty()) {
        return segment.to_string();
    }
    if !alt.is_empty() {
        return alt.to_string();
    }
    "unknown".to_string()
}

/// 散布図用の系列を導出する
///
/// sizeまたはload_timeが未計測のレコードはプロットできないため
/// 除外する。idは1回の描画内で安定していればよい
pub fn derive_scatter_series(images: &[ImageScanResult]) -> Vec<ScatterPoint> {
    images
        .iter()
        .enumerate()
        .filter_map(|(index, image)| {
            let size = image.size?;
            let load_time = image.network.load_time?;

            let id = if image.network.request_id.is_empty() {
                format!("img-{}", index)
            } else {
                image.network.request_id.clone()
            };

            Some(ScatterPoint {
                id,
                file_name: file_name_from_src(&image.src, &image.alt),
                file_size_kb: round2(size as f64 / 1024.0),
                load_time_ms: round2(load_time * 1000.0),
                format: format_label(&image.format),
            })
        })
        .collect()
}

/// 読み込み時間（ミリ秒）をステータスへ分類する
///
/// 境界は下端閉・上端開: [0,100) / [100,200) / [200,∞)
pub fn classify_load_time(load_time_ms: f64) -> LoadTimeStatus {
    if load_time_ms < 100.0 {
        LoadTimeStatus::Success
    } else if load_time_ms < 200.0 {
        LoadTimeStatus::Warning
    } else {
        LoadTimeStatus::Error
    }
}

/// 生のload_time（秒）から分類する
///
/// 閾値はミリ秒基準なので、必ず変換してから判定する
pub fn classify_load_time_secs(load_time_secs: f64) -> LoadTimeStatus {
    classify_load_time(load_time_secs * 1000.0)
}

/// Aggregationsをクライアント側で再計算する
///
/// formatDistributionは画像の出現順で構築し、値の合計が
/// image_countと一致する不変条件を保つ
pub fn compute_aggregations(images: &[ImageScanResult]) -> Aggregations {
    let mut format_distribution: IndexMap<String, u32> = IndexMap::new();
    let mut total_size = 0u64;
    let mut load_time_sum = 0.0;
    let mut load_time_count = 0usize;
    let mut size_sum = 0u64;
    let mut size_count = 0usize;

    for image in images {
        *format_distribution.entry(image.format.clone()).or_insert(0) += 1;

        if let Some(size) = image.size {
            total_size += size;
            size_sum += size;
            size_count += 1;
        }
        if let Some(load_time) = image.network.load_time {
            load_time_sum += load_time;
            load_time_count += 1;
        }
    }

    Aggregations {
        image_count: images.len() as u32,
        avg_load_time: if load_time_count == 0 {
            0.0
        } else {
            load_time_sum / load_time_count as f64
        },
        avg_size: if size_count == 0 {
            0.0
        } else {
            size_sum as f64 / size_count as f64
        },
        total_size,
        format_distribution,
    }
}

/// サーバー集計があればそれを、なければ再計算した集計を返す
pub fn effective_aggregations(scan: &Scan) -> Aggregations {
    scan.aggregations
        .clone()
        .unwrap_or_else(|| compute_aggregations(&scan.images))
}

/// 結果テーブル表示用: サイズ不明(None)と0バイトの画像を除外する
pub fn filter_displayable(images: &[ImageScanResult]) -> Vec<ImageScanResult> {
    images
        .iter()
        .filter(|image| matches!(image.size, Some(size) if size > 0))
        .cloned()
        .collect()
}

/// 履歴カードのステータスを導出する
///
/// HTTPエラーを含めばFailed、200ms以上の画像を含めばDegraded
pub fn derive_history_status(scan: &Scan) -> HistoryStatus {
    if scan.images.iter().any(|image| image.network.status >= 400) {
        return HistoryStatus::Failed;
    }

    let has_slow_image = scan.images.iter().any(|image| {
        image
            .network
            .load_time
            .map(|secs| classify_load_time_secs(secs) == LoadTimeStatus::Error)
            .unwrap_or(false)
    });

    if has_slow_image {
        HistoryStatus::Degraded
    } else {
        HistoryStatus::Healthy
    }
}

/// 寸法の表示文字列（"800x600 px"）
pub fn dimensions_label(image: &ImageScanResult) -> String {
    format!("{}x{} px", image.width, image.height)
}

/// ファイルサイズの表示文字列（小数第1位KB）
pub fn file_size_label(size: Option<u64>) -> String {
    match size {
        Some(size) => format!("{:.1} KB", size as f64 / 1024.0),
        None => "-".to_string(),
    }
}

/// 読み込み時間の表示文字列（整数ms）
pub fn load_time_label(load_time_secs: Option<f64>) -> String {
    match load_time_secs {
        Some(secs) => format!("{:.0} ms", secs * 1000.0),
        None => "-".to_string(),
    }
}

/// レスポンスヘッダからキャッシュ状態(x-cache)を取り出す
pub fn cache_status(image: &ImageScanResult) -> Option<&str> {
    image
        .network
        .response_headers
        .get("x-cache")
        .map(String::as_str)
}

/// content-lengthヘッダをKBで返す
pub fn content_length_kb(image: &ImageScanResult) -> Option<f64> {
    image
        .network
        .response_headers
        .get("content-length")
        .and_then(|value| value.parse::<u64>().ok())
        .map(|bytes| round2(bytes as f64 / 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NetworkInfo;

    fn image(size: Option<u64>, load_time: Option<f64>) -> ImageScanResult {
        ImageScanResult {
            src: "https://example.com/images/photo.png".to_string(),
            format: "image/png".to_string(),
            size,
            network: NetworkInfo { load_time, ..Default::default() },
            ..Default::default()
        }
    }

    // =============================================
    // derive_summary テスト
    // =============================================

    #[test]
    fn test_derive_summary_empty() {
        // 空入力はゼロ除算にならずゼロ埋めで返る
        let summary = derive_summary(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg_load_time_ms, 0.0);
        assert_eq!(summary.avg_size_kb, 0.0);
    }

    #[test]
    fn test_derive_summary_average_in_ms() {
        // 秒の平均0.1秒 → 100.00ms
        let images = vec![
            image(Some(1024), Some(0.05)),
            image(Some(2048), Some(0.10)),
            image(Some(3072), Some(0.15)),
        ];

        let summary = derive_summary(&images);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.avg_load_time_ms, 100.00);
        assert_eq!(summary.avg_size_kb, 2.0); // (1+2+3)KB / 3
    }

    #[test]
    fn test_derive_summary_skips_missing_load_time() {
        // 未計測レコードは0扱いせず平均から除外する
        let images = vec![
            image(Some(1024), Some(0.1)),
            image(Some(1024), Some(0.1)),
            image(Some(1024), None),
        ];

        let summary = derive_summary(&images);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.avg_load_time_ms, 100.00); // 66.67にならない
    }

    #[test]
    fn test_derive_summary_all_load_times_missing() {
        let images = vec![image(Some(1024), None)];
        let summary = derive_summary(&images);
        assert_eq!(summary.avg_load_time_ms, 0.0);
        assert_eq!(summary.avg_size_kb, 1.0);
    }

    #[test]
    fn test_derive_summary_rounds_to_two_decimals() {
        let images = vec![
            image(Some(1000), Some(0.0333)),
            image(Some(1000), Some(0.0334)),
            image(Some(1000), Some(0.0333)),
        ];

        let summary = derive_summary(&images);
        assert_eq!(summary.avg_load_time_ms, 33.33);
        assert_eq!(summary.avg_size_kb, 0.98);
    }

    // =============================================
    // classify_load_time テスト
    // =============================================

    #[test]
    fn test_classify_load_time_boundaries() {
        // 下端閉・上端開
        assert_eq!(classify_load_time(99.9), LoadTimeStatus::Success);
        assert_eq!(classify_load_time(100.0), LoadTimeStatus::Warning);
        assert_eq!(classify_load_time(199.9), LoadTimeStatus::Warning);
        assert_eq!(classify_load_time(200.0), LoadTimeStatus::Error);
    }

    #[test]
    fn test_classify_load_time_zero() {
        assert_eq!(classify_load_time(0.0), LoadTimeStatus::Success);
    }

    #[test]
    fn test_classify_load_time_secs_converts_to_ms() {
        // 秒のままだとほぼすべてsuccessに誤分類されるため
        // 変換後の値で判定する
        assert_eq!(classify_load_time_secs(0.053), LoadTimeStatus::Success);
        assert_eq!(classify_load_time_secs(0.150), LoadTimeStatus::Warning);
        assert_eq!(classify_load_time_secs(0.250), LoadTimeStatus::Error);
    }

    #[test]
    fn test_load_time_status_as_str() {
        assert_eq!(LoadTimeStatus::Success.as_str(), "success");
        assert_eq!(LoadTimeStatus::Warning.as_str(), "warning");
        assert_eq!(LoadTimeStatus::Error.as_str(), "error");
    }

    // =============================================
    // derive_format_distribution テスト
    // =============================================

    #[test]
    fn test_derive_format_distribution() {
        let mut distribution = IndexMap::new();
        distribution.insert("image/png".to_string(), 3);
        distribution.insert("image/webp".to_string(), 1);

        let shares = derive_format_distribution(&distribution, 4);

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].label, "PNG");
        assert_eq!(shares[0].percent, 75.0);
        assert_eq!(shares[1].label, "WEBP");
        assert_eq!(shares[1].percent, 25.0);
    }

    #[test]
    fn test_derive_format_distribution_keeps_insertion_order() {
        // 件数順に並べ替えない
        let mut distribution = IndexMap::new();
        distribution.insert("image/webp".to_string(), 1);
        distribution.insert("image/png".to_string(), 5);

        let shares = derive_format_distribution(&distribution, 6);
        assert_eq!(shares[0].label, "WEBP");
        assert_eq!(shares[1].label, "PNG");
    }

    #[test]
    fn test_derive_format_distribution_zero_total() {
        let mut distribution = IndexMap::new();
        distribution.insert("image/png".to_string(), 2);

        let shares = derive_format_distribution(&distribution, 0);
        assert_eq!(shares[0].percent, 0.0);
    }

    #[test]
    fn test_format_share_labels() {
        let share = FormatShare { label: "PNG".to_string(), count: 3, percent: 75.0 };
        assert_eq!(share.chart_label(), "png (75%)");
        assert_eq!(share.tooltip_text(), "PNG: 3 (75.0%)");
    }

    #[test]
    fn test_format_label_without_prefix() {
        // "image/"前置きがないフォーマットもそのまま大文字化
        assert_eq!(format_label("svg"), "SVG");
        assert_eq!(format_label("image/jpeg"), "JPEG");
    }

    // =============================================
    // derive_scatter_series テスト
    // =============================================

    #[test]
    fn test_derive_scatter_series_excludes_incomplete_records() {
        let images = vec![
            image(Some(107806), Some(0.052)),
            image(None, Some(0.1)),     // サイズ欠落
            image(Some(2048), None),    // load_time欠落
            image(Some(15360), Some(0.02)),
        ];

        let series = derive_scatter_series(&images);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_derive_scatter_series_values() {
        let mut img = image(Some(107806), Some(0.052));
        img.network.request_id = "1234.56".to_string();

        let series = derive_scatter_series(&[img]);
        let point = &series[0];
        assert_eq!(point.id, "1234.56");
        assert_eq!(point.file_name, "photo.png");
        assert_eq!(point.file_size_kb, 105.28);
        assert_eq!(point.load_time_ms, 52.0);
        assert_eq!(point.format, "PNG");
    }

    #[test]
    fn test_derive_scatter_series_fallback_id_is_stable() {
        // request_idがない場合はインデックス由来のトークン
        let images = vec![image(Some(1024), Some(0.01)), image(Some(1024), Some(0.01))];

        let first = derive_scatter_series(&images);
        let second = derive_scatter_series(&images);
        assert_eq!(first[0].id, "img-0");
        assert_eq!(first[1].id, "img-1");
        assert_eq!(first, second);
    }

    #[test]
    fn test_file_name_from_src() {
        assert_eq!(
            file_name_from_src("https://example.com/assets/logo.png", ""),
            "logo.png"
        );
        assert_eq!(
            file_name_from_src("https://example.com/assets/", ""),
            "assets"
        );
        assert_eq!(file_name_from_src("", "ヒーロー画像"), "ヒーロー画像");
        assert_eq!(file_name_from_src("", ""), "unknown");
        assert_eq!(file_name_from_src("///", ""), "unknown");
    }

    // =============================================
    // 集計の再計算テスト
    // =============================================

    #[test]
    fn test_compute_aggregations_distribution_sums_to_count() {
        let mut images = vec![
            image(Some(1024), Some(0.1)),
            image(Some(2048), Some(0.2)),
            image(Some(4096), Some(0.3)),
        ];
        images[1].format = "image/webp".to_string();

        let agg = compute_aggregations(&images);
        assert_eq!(agg.image_count, 3);

        let distribution_total: u32 = agg.format_distribution.values().sum();
        assert_eq!(distribution_total, agg.image_count);

        assert_eq!(agg.total_size, 7168);
        assert!((agg.avg_load_time - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_compute_aggregations_empty() {
        let agg = compute_aggregations(&[]);
        assert_eq!(agg.image_count, 0);
        assert_eq!(agg.avg_load_time, 0.0);
        assert_eq!(agg.avg_size, 0.0);
        assert!(agg.format_distribution.is_empty());
    }

    #[test]
    fn test_effective_aggregations_prefers_server_values() {
        let scan = Scan {
            aggregations: Some(Aggregations { image_count: 42, ..Default::default() }),
            images: vec![image(Some(1), Some(0.1))],
            ..Default::default()
        };
        assert_eq!(effective_aggregations(&scan).image_count, 42);

        let scan_without = Scan { images: vec![image(Some(1), Some(0.1))], ..Default::default() };
        assert_eq!(effective_aggregations(&scan_without).image_count, 1);
    }

    // =============================================
    // 表示用ヘルパーテスト
    // =============================================

    #[test]
    fn test_filter_displayable_excludes_zero_and_unknown_size() {
        let images = vec![image(Some(1024), None), image(Some(0), None), image(None, None)];
        let displayable = filter_displayable(&images);
        assert_eq!(displayable.len(), 1);
        assert_eq!(displayable[0].size, Some(1024));
    }

    #[test]
    fn test_derive_history_status() {
        let healthy = Scan { images: vec![image(Some(1), Some(0.05))], ..Default::default() };
        assert_eq!(derive_history_status(&healthy), HistoryStatus::Healthy);

        let degraded = Scan { images: vec![image(Some(1), Some(0.25))], ..Default::default() };
        assert_eq!(derive_history_status(&degraded), HistoryStatus::Degraded);

        let mut failed_image = image(Some(1), Some(0.05));
        failed_image.network.status = 404;
        let failed = Scan { images: vec![failed_image], ..Default::default() };
        assert_eq!(derive_history_status(&failed), HistoryStatus::Failed);
    }

    #[test]
    fn test_history_status_is_deterministic() {
        let scan = Scan { images: vec![image(Some(1), Some(0.25))], ..Default::default() };
        let first = derive_history_status(&scan);
        let second = derive_history_status(&scan);
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_labels() {
        let mut img = image(Some(107806), Some(0.053244));
        img.width = 800;
        img.height = 600;

        assert_eq!(dimensions_label(&img), "800x600 px");
        assert_eq!(file_size_label(img.size), "105.3 KB");
        assert_eq!(load_time_label(img.network.load_time), "53 ms");
        assert_eq!(file_size_label(None), "-");
        assert_eq!(load_time_label(None), "-");
    }

    #[test]
    fn test_modal_header_projections() {
        let mut img = image(Some(107806), Some(0.053));
        img.network
            .response_headers
            .insert("x-cache".to_string(), "HIT".to_string());
        img.network
            .response_headers
            .insert("content-length".to_string(), "107498".to_string());

        assert_eq!(cache_status(&img), Some("HIT"));
        assert_eq!(content_length_kb(&img), Some(104.98));

        let plain = image(None, None);
        assert_eq!(cache_status(&plain), None);
        assert_eq!(content_length_kb(&plain), None);
    }
}
