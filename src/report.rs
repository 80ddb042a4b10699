//! スキャン結果のテキストレポート生成
//!
//! Webダッシュボードと同じ集計ロジック（sharprender-common）を使い、
//! 端末向けのレポート文字列を組み立てる

use sharprender_common::{
    classify_load_time_secs, derive_format_distribution, derive_history_status, derive_summary,
    dimensions_label, effective_aggregations, file_name_from_src, file_size_label, filter_displayable,
    format_label, load_time_label, Scan,
};

/// サマリ＋フォーマット分布＋画像テーブルを1枚のレポートにする
pub fn render_report(scan: &Scan) -> String {
    let mut out = String::new();

    out.push_str(&format!("スキャン: {}\n", scan.url));
    out.push_str(&format!("スキャンID: {}\n", scan.scan_id));
    if !scan.created_at.is_empty() {
        out.push_str(&format!("日時: {}\n", scan.created_at));
    }
    out.push('\n');

    out.push_str(&render_summary(scan));
    out.push('\n');
    out.push_str(&render_distribution(scan));
    out.push('\n');
    out.push_str(&render_table(scan));

    out
}

pub fn render_summary(scan: &Scan) -> String {
    let summary = derive_summary(&scan.images);
    format!(
        "■ サマリ\n  画像数: {}\n  平均読み込み時間: {:.2} ms\n  平均画像サイズ: {:.2} KB\n",
        summary.count, summary.avg_load_time_ms, summary.avg_size_kb,
    )
}

pub fn render_distribution(scan: &Scan) -> String {
    let aggregations = effective_aggregations(scan);
    let shares = derive_format_distribution(&aggregations.format_distribution, aggregations.image_count);

    let mut out = String::from("■ フォーマット分布\n");
    if shares.is_empty() {
        out.push_str("  （データなし）\n");
        return out;
    }

    for share in shares {
        out.push_str(&format!(
            "  {:<8} {:>4}枚 ({:.1}%)\n",
            share.label, share.count, share.percent,
        ));
    }
    out
}

pub fn render_table(scan: &Scan) -> String {
    let images = filter_displayable(&scan.images);

    let mut out = String::from("■ 画像一覧\n");
    if images.is_empty() {
        out.push_str("  （表示可能な画像がありません）\n");
        return out;
    }

    out.push_str(&format!(
        "  {:<40} {:<12} {:>10} {:<8} {:>10} {:<8}\n",
        "ファイル名", "寸法", "サイズ", "形式", "読み込み", "状態",
    ));

    for image in images {
        let status = image
            .network
            .load_time
            .map(|secs| classify_load_time_secs(secs).as_str())
            .unwrap_or("-");
        out.push_str(&format!(
            "  {:<40} {:<12} {:>10} {:<8} {:>10} {:<8}\n",
            truncate(&file_name_from_src(&image.src, &image.alt), 40),
            dimensions_label(&image),
            file_size_label(image.size),
            format_label(&image.format),
            load_time_label(image.network.load_time),
            status,
        ));
    }
    out
}

pub fn render_history(scans: &[Scan], limit: usize) -> String {
    let mut out = String::from("■ スキャン履歴\n");
    if scans.is_empty() {
        out.push_str("  （履歴がありません）\n");
        return out;
    }

    for scan in scans.iter().take(limit) {
        let status = derive_history_status(scan);
        out.push_str(&format!(
            "  {:<10} {:<40} 画像{}枚  {}\n",
            status.as_str(),
            truncate(&scan.url, 40),
            scan.images.len(),
            scan.created_at,
        ));
        out.push_str(&format!("    ID: {}\n", scan.scan_id));
    }
    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", head)
}
