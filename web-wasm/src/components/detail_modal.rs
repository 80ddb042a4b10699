//! 画像詳細モーダルコンポーネント
//!
//! 1枚の画像について物理属性・ネットワークデータ・AI提案を表示する

use leptos::prelude::*;
use sharprender_common::projector::{
    cache_status, content_length_kb, dimensions_label, file_name_from_src, file_size_label,
};
use sharprender_common::ImageScanResult;

#[component]
pub fn DetailModal<F>(image: ImageScanResult, on_close: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    let file_name = file_name_from_src(&image.src, &image.alt);
    let dimensions = dimensions_label(&image);
    let size_text = file_size_label(image.size);
    let cache_text = cache_status(&image).unwrap_or("-").to_string();
    let content_length_text = content_length_kb(&image)
        .map(|kb| format!("{:.1} KB", kb))
        .unwrap_or_else(|| "-".to_string());
    let load_time_text = image
        .network
        .load_time
        .map(|secs| format!("{}s", secs))
        .unwrap_or_else(|| "-".to_string());
    let status_ok = (200..300).contains(&image.network.status);

    // entriesはimageを借りるため、viewへ渡す前に所有権を切り離す
    let recommendations: Vec<(&'static str, String)> = image
        .ai_recommendation
        .entries()
        .into_iter()
        .map(|(label, text)| (label, text.to_string()))
        .collect();

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <section class="modal-grid">
                    <div class="modal-image">
                        <img src=image.src.clone() alt=image.alt.clone() />
                    </div>

                    <div class="modal-panel">
                        <h3>"画像詳細"</h3>
                        <dl>
                            <dt>"サイズ"</dt>
                            <dd>{size_text}</dd>
                            <dt>"フォーマット"</dt>
                            <dd>{image.format.clone()}</dd>
                            <dt>"寸法"</dt>
                            <dd>{dimensions}</dd>
                            <dt>"ファイル名"</dt>
                            <dd>{file_name}</dd>
                        </dl>
                    </div>

                    <div class="modal-panel">
                        <h3>"ネットワークデータ"</h3>
                        <dl>
                            <dt>"ステータス"</dt>
                            <dd>
                                {image.network.status.to_string()}
                                <Show when=move || status_ok>
                                    <span class="status-badge success">"OK"</span>
                                </Show>
                            </dd>
                            <dt>"プロトコル"</dt>
                            <dd>{image.network.protocol.to_uppercase()}</dd>
                            <dt>"読み込み時間"</dt>
                            <dd>{load_time_text}</dd>
                            <dt>"MIMEタイプ"</dt>
                            <dd>{image.network.mime_type.clone()}</dd>
                            <dt>"キャッシュ"</dt>
                            <dd>{cache_text}</dd>
                            <dt>"Content-Length"</dt>
                            <dd>{content_length_text}</dd>
                        </dl>
                    </div>
                </section>

                <section class="modal-recommendations">
                    <h4>"AI最適化提案"</h4>
                    <ul>
                        {recommendations.into_iter().map(|(label, text)| view! {
                            <li><strong>{label}": "</strong>{text}</li>
                        }).collect_view()}
                    </ul>
                </section>

                <section class="modal-actions">
                    <button
                        class="btn btn-secondary"
                        on:click={
                            let on_close = on_close.clone();
                            move |_| on_close(())
                        }
                    >
                        "閉じる"
                    </button>
                </section>
            </div>
        </div>
    }
}
