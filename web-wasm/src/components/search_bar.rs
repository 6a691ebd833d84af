//! 検索バーコンポーネント
//!
//! 明示的な送信はなく、入力のたびに絞り込みが走る。

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="手法名・API・文字列で絞り込み"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
        </div>
    }
}
