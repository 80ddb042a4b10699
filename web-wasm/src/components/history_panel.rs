//! スキャン履歴コンポーネント
//!
//! 過去のスキャンをカードで一覧表示する。カードのステータスは
//! スキャンデータから決定的に導出する（乱数は使わない）

use leptos::prelude::*;
use sharprender_common::{derive_history_status, Scan};

#[component]
pub fn HistoryPanel(scans: ReadSignal<Vec<Scan>>) -> impl IntoView {
    view! {
        <section class="history-panel">
            <h2>"スキャン履歴"</h2>
            <Show
                when=move || !scans.get().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"まだスキャン履歴がありません"</p>
                        <p class="text-muted">"上のフォームからURLを入力してスキャンを開始してください"</p>
                    </div>
                }
            >
                <div class="history-list">
                    <For
                        each=move || scans.get()
                        key=|scan| scan.scan_id.clone()
                        children=move |scan| {
                            let status = derive_history_status(&scan);
                            let metadata = scan.metadata.clone().unwrap_or_default();
                            let title = if metadata.title.is_empty() {
                                scan.url.clone()
                            } else {
                                metadata.title
                            };
                            let icon = if !metadata.favicon.is_empty() {
                                metadata.favicon
                            } else {
                                metadata.og_image
                            };
                            let image_count = scan.images.len();
                            let icon_view = (!icon.is_empty()).then(|| view! {
                                <img class="favicon" src=icon.clone() alt="favicon" />
                            });

                            view! {
                                <div class="history-card">
                                    {icon_view}
                                    <div class="history-card-body">
                                        <h4>{title}</h4>
                                        <p class="text-muted">{metadata.description}</p>
                                        <div class="history-meta">
                                            <span class=format!("status-badge {}", status.as_str())>
                                                {status.as_str()}
                                            </span>
                                            <span>{format!("画像 {}枚", image_count)}</span>
                                            <span class="text-muted">{scan.created_at.clone()}</span>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
