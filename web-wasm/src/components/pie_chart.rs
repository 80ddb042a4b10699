//! フォーマット分布の円グラフコンポーネント
//!
//! derive_format_distributionの系列をSVGドーナツで描画する。
//! 区分の順序は系列の順序そのまま（並べ替えない）

use leptos::prelude::*;
use sharprender_common::FormatShare;

const COLORS: [&str; 4] = ["#0EA5E9", "#0284C7", "#0369A1", "#0C4A6E"];

#[component]
pub fn FormatPieChart(shares: Memo<Vec<FormatShare>>) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h3>"フォーマット分布"</h3>
            <svg viewBox="0 0 42 42" class="pie-chart">
                {move || {
                    // r=15.9155で円周がちょうど100になり、percentを
                    // そのままstroke-dasharrayに使える
                    let mut offset = 25.0; // 12時位置から開始
                    shares.get().into_iter().enumerate().map(|(index, share)| {
                        let dasharray = format!("{} {}", share.percent, 100.0 - share.percent);
                        let dashoffset = format!("{}", offset);
                        offset -= share.percent;
                        view! {
                            <circle
                                cx="21"
                                cy="21"
                                r="15.9155"
                                fill="transparent"
                                stroke=COLORS[index % COLORS.len()]
                                stroke-width="6"
                                stroke-dasharray=dasharray
                                stroke-dashoffset=dashoffset
                            >
                                <title>{share.tooltip_text()}</title>
                            </circle>
                        }
                    }).collect_view()
                }}
            </svg>
            <ul class="chart-legend">
                {move || shares.get().into_iter().enumerate().map(|(index, share)| view! {
                    <li>
                        <span
                            class="legend-dot"
                            style=format!("background: {}", COLORS[index % COLORS.len()])
                        ></span>
                        {share.chart_label()}
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
