//! 読み込み時間×ファイルサイズの散布図コンポーネント
//!
//! derive_scatter_seriesの系列をSVGで描画する。プロット不能な
//! レコード（size/load_time欠落）は系列側で除外済み

use leptos::prelude::*;
use sharprender_common::ScatterPoint;

const WIDTH: f64 = 500.0;
const HEIGHT: f64 = 350.0;
const MARGIN: f64 = 40.0;

#[component]
pub fn ScatterChart(points: Memo<Vec<ScatterPoint>>) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h3>"読み込み時間 vs ファイルサイズ"</h3>
            <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) class="scatter-chart">
                // X軸/Y軸
                <line
                    x1=format!("{}", MARGIN)
                    y1=format!("{}", HEIGHT - MARGIN)
                    x2=format!("{}", WIDTH - MARGIN)
                    y2=format!("{}", HEIGHT - MARGIN)
                    stroke="#CBD5E0"
                />
                <line
                    x1=format!("{}", MARGIN)
                    y1=format!("{}", MARGIN)
                    x2=format!("{}", MARGIN)
                    y2=format!("{}", HEIGHT - MARGIN)
                    stroke="#CBD5E0"
                />
                <text x=format!("{}", WIDTH / 2.0) y=format!("{}", HEIGHT - 8.0) class="axis-label">
                    "ファイルサイズ (KB)"
                </text>
                <text
                    x="12"
                    y=format!("{}", HEIGHT / 2.0)
                    class="axis-label"
                    transform=format!("rotate(-90 12 {})", HEIGHT / 2.0)
                >
                    "読み込み時間 (ms)"
                </text>
                {move || {
                    let series = points.get();
                    let max_x = series.iter().map(|p| p.file_size_kb).fold(1.0f64, f64::max);
                    let max_y = series.iter().map(|p| p.load_time_ms).fold(1.0f64, f64::max);

                    series.into_iter().map(|point| {
                        let cx = MARGIN + point.file_size_kb / max_x * (WIDTH - 2.0 * MARGIN);
                        let cy = HEIGHT - MARGIN - point.load_time_ms / max_y * (HEIGHT - 2.0 * MARGIN);
                        let tooltip = format!(
                            "{} ({})\nファイルサイズ: {} KB\n読み込み時間: {} ms",
                            point.file_name, point.format, point.file_size_kb, point.load_time_ms,
                        );
                        view! {
                            <circle
                                cx=format!("{:.1}", cx)
                                cy=format!("{:.1}", cy)
                                r="6"
                                fill="#3182CE"
                                stroke="#2C5282"
                            >
                                <title>{tooltip}</title>
                            </circle>
                        }
                    }).collect_view()
                }}
            </svg>
        </div>
    }
}
