//! スキャン結果テーブルコンポーネント
//!
//! サイズ不明/0バイトの画像は呼び出し側でfilter_displayable
//! により除外済みの前提

use leptos::prelude::*;
use sharprender_common::projector::{
    classify_load_time_secs, dimensions_label, file_size_label, format_label, load_time_label,
};
use sharprender_common::ImageScanResult;

#[component]
pub fn ResultsTable<F>(
    images: Memo<Vec<ImageScanResult>>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(ImageScanResult) + 'static + Clone + Send,
{
    view! {
        <section class="results-table">
            <h2>"スキャン結果"</h2>
            <table>
                <thead>
                    <tr>
                        <th>"サムネイル"</th>
                        <th>"ファイル名"</th>
                        <th>"寸法"</th>
                        <th>"サイズ"</th>
                        <th>"フォーマット"</th>
                        <th>"読み込み時間"</th>
                        <th>"ステータス"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each={move || images.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(index, image)| {
                            // request_idがあれば行キーに使う
                            if image.network.request_id.is_empty() {
                                format!("img-{}", index)
                            } else {
                                image.network.request_id.clone()
                            }
                        }
                        children=move |(_, image)| {
                            let on_select = on_select.clone();

                            // 分類は必ずミリ秒換算後の値で行う
                            let status = image.network.load_time.map(classify_load_time_secs);
                            let status_text = status.map(|s| s.as_str()).unwrap_or("-");
                            let status_class =
                                format!("status-badge {}", status.map(|s| s.as_str()).unwrap_or("unknown"));

                            let alt_text = if image.alt.is_empty() {
                                "altなし".to_string()
                            } else {
                                image.alt.clone()
                            };
                            let row_image = image.clone();

                            view! {
                                <tr>
                                    <td>
                                        <img class="thumbnail" src=image.src.clone() alt=image.alt.clone() />
                                    </td>
                                    <td>{alt_text}</td>
                                    <td>{dimensions_label(&image)}</td>
                                    <td>{file_size_label(image.size)}</td>
                                    <td>{format_label(&image.format)}</td>
                                    <td>{load_time_label(image.network.load_time)}</td>
                                    <td><span class=status_class>{status_text}</span></td>
                                    <td>
                                        <button
                                            class="btn btn-small"
                                            on:click=move |_| on_select(row_image.clone())
                                        >
                                            "詳細"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
