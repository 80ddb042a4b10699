//! サマリーカードコンポーネント
//!
//! derive_summaryの結果を3枚のカードで表示する

use leptos::prelude::*;
use sharprender_common::ScanSummary;

#[component]
pub fn OverviewCards(summary: Memo<ScanSummary>) -> impl IntoView {
    view! {
        <section class="overview-grid">
            <OverviewCard
                metric="画像数"
                value=Signal::derive(move || summary.get().count.to_string())
                description="ページ上で検出された画像の総数"
            />
            <OverviewCard
                metric="平均読み込み時間"
                value=Signal::derive(move || format!("{:.2} ms", summary.get().avg_load_time_ms))
                description="画像1枚あたりの平均読み込み時間"
            />
            <OverviewCard
                metric="平均画像サイズ"
                value=Signal::derive(move || format!("{:.2} KB", summary.get().avg_size_kb))
                description="ページ上の画像の平均サイズ"
            />
        </section>
    }
}

#[component]
fn OverviewCard(
    metric: &'static str,
    value: Signal<String>,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="overview-card">
            <span class="metric-name">{metric}</span>
            <span class="metric-value">{move || value.get()}</span>
            <p class="text-muted">{description}</p>
        </div>
    }
}
