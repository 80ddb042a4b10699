//! スキャンフォームコンポーネント
//!
//! URL入力 → 正規化・検証 → 送信。検証エラーは送信せずに
//! インライン表示する

use leptos::prelude::*;
use sharprender_common::normalize_url;

#[component]
pub fn ScanForm<F>(
    is_loading: ReadSignal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let (url_input, set_url_input) = signal(String::new());
    let (validation_error, set_validation_error) = signal(None::<String>);

    let submit = {
        let on_submit = on_submit.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            match normalize_url(&url_input.get()) {
                Ok(normalized) => {
                    set_validation_error.set(None);
                    on_submit(normalized);
                }
                Err(e) => set_validation_error.set(Some(e.to_string())),
            }
        }
    };

    view! {
        <section class="scan-form">
            <p class="text-muted">"スキャンしたいページのURLを入力してください"</p>
            <form on:submit=submit>
                <input
                    type="text"
                    placeholder="https://example.com"
                    prop:value=move || url_input.get()
                    on:input=move |ev| {
                        set_url_input.set(event_target_value(&ev));
                    }
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "スキャン中..." } else { "スキャン" }}
                </button>
            </form>
            <Show when=move || validation_error.get().is_some()>
                <p class="validation-error">{move || validation_error.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
