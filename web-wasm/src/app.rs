//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use sharprender_common::{
    derive_format_distribution, derive_scatter_series, derive_summary, effective_aggregations,
    filter_displayable, ImageScanResult, Scan,
};
use crate::api;
use crate::auth::{self, UserIdentity};
use crate::components::{
    detail_modal::DetailModal,
    header::Header,
    history_panel::HistoryPanel,
    overview_cards::OverviewCards,
    pie_chart::FormatPieChart,
    results_table::ResultsTable,
    scan_form::ScanForm,
    scatter_chart::ScatterChart,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (user, set_user) = signal(None::<UserIdentity>);
    let (scan, set_scan) = signal(None::<Scan>);
    let (history, set_history) = signal(Vec::<Scan>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (selected_image, set_selected_image) = signal(None::<ImageScanResult>);

    // 起動時にログインユーザーと履歴を取得
    spawn_local(async move {
        if let Some(identity) = auth::current_user().await {
            let user_id = identity.id.clone();
            set_user.set(Some(identity));
            match api::scan::get_scan_history(&user_id).await {
                Ok(scans) => set_history.set(scans),
                Err(e) => {
                    set_error.set(Some(fetch_error_message("履歴の取得に失敗しました", &e)))
                }
            }
        }
    });

    // スキャン送信ハンドラ（URLはフォーム側で検証済み）
    let on_submit = move |url: String| {
        let Some(identity) = user.get_untracked() else {
            // ネットワーク呼び出しの前に未ログインを弾く
            set_error.set(Some("ログインしていません。サインインしてください".to_string()));
            return;
        };

        set_error.set(None);
        set_is_loading.set(true);
        spawn_local(async move {
            let result = async {
                let created = api::scan::submit_scan(&url, &identity.id).await?;
                api::scan::get_scan(&created.scan_id).await
            }
            .await;

            match result {
                Ok(new_scan) => {
                    // 完了したスキャンは再読み込みなしで履歴にも現れる
                    set_history.update(|scans| merge_into_history(scans, &new_scan));
                    set_scan.set(Some(new_scan));
                }
                Err(e) => set_error.set(Some(fetch_error_message("スキャンに失敗しました", &e))),
            }
            set_is_loading.set(false);
        });
    };

    // 詳細モーダルの開閉ハンドラ
    let on_select_image = move |image: ImageScanResult| set_selected_image.set(Some(image));
    let on_close_modal = move |_: ()| set_selected_image.set(None);

    // 表示用の派生値（プロジェクタ経由でのみ計算する）
    let summary = Memo::new(move |_| {
        scan.with(|s| s.as_ref().map(|s| derive_summary(&s.images)).unwrap_or_default())
    });
    let format_shares = Memo::new(move |_| {
        scan.with(|s| {
            s.as_ref()
                .map(|s| {
                    let agg = effective_aggregations(s);
                    derive_format_distribution(&agg.format_distribution, agg.image_count)
                })
                .unwrap_or_default()
        })
    });
    let scatter_points = Memo::new(move |_| {
        scan.with(|s| s.as_ref().map(|s| derive_scatter_series(&s.images)).unwrap_or_default())
    });
    let table_images = Memo::new(move |_| {
        scan.with(|s| s.as_ref().map(|s| filter_displayable(&s.images)).unwrap_or_default())
    });

    view! {
        <div class="container">
            <Header user=user />

            <ScanForm is_loading=is_loading on_submit=on_submit />

            <Show when=move || error.get().is_some()>
                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || scan.get().is_some()
                fallback=move || view! { <HistoryPanel scans=history /> }
            >
                <OverviewCards summary=summary />

                <div class="chart-row">
                    <FormatPieChart shares=format_shares />
                    <ScatterChart points=scatter_points />
                </div>

                <ResultsTable images=table_images on_select=on_select_image />
            </Show>

            {move || selected_image.get().map(|image| view! {
                <DetailModal image=image on_close=on_close_modal />
            })}
        </div>
    }
}

/// API呼び出し失敗を表示用メッセージにする
fn fetch_error_message(context: &str, err: &wasm_bindgen::JsValue) -> String {
    format!("{}: {:?}", context, err)
}

/// 完了したスキャンを履歴の先頭へ反映する
///
/// 同じscan_idが既にあれば置き換える（重複カードを作らない）
fn merge_into_history(history: &mut Vec<Scan>, scan: &Scan) {
    history.retain(|existing| existing.scan_id != scan.scan_id);
    history.insert(0, scan.clone());
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_fetch_error_message_keeps_context() {
        let message =
            fetch_error_message("履歴の取得に失敗しました", &JsValue::from_str("API error: 500"));
        assert!(message.starts_with("履歴の取得に失敗しました"));
        assert!(message.contains("API error: 500"));
    }
}
