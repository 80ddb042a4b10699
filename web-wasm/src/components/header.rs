//! ヘッダーコンポーネント

use leptos::prelude::*;
use crate::auth::UserIdentity;

#[component]
pub fn Header(user: ReadSignal<Option<UserIdentity>>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"SharpRender - 画像パフォーマンススキャナー"</h1>
            {move || match user.get() {
                Some(identity) => {
                    let avatar = (!identity.avatar_url.is_empty()).then(|| view! {
                        <img class="avatar" src=identity.avatar_url.clone() alt=identity.name.clone() />
                    });
                    view! {
                        <div class="user-info">
                            {avatar}
                            <span>{identity.name.clone()}</span>
                        </div>
                    }
                    .into_any()
                }
                None => view! {
                    <div class="user-info">
                        <span class="text-muted">"未ログイン"</span>
                    </div>
                }
                .into_any(),
            }}
        </header>
    }
}
