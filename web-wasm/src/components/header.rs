//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"CapaScope - バイナリ挙動解析"</h1>
            <p class="text-muted">
                "ファイルをアップロードして検出された手法をカテゴリ別・時系列で確認"
            </p>
        </header>
    }
}
