//! カテゴリカードグリッドコンポーネント
//!
//! カテゴリごとに総数 + 先頭3件のプレビューを出し、
//! 残りは「全N件を表示」で展開する。

use capascope_common::{CategoryGroup, GroupedView, PREVIEW_LIMIT};
use leptos::prelude::*;

#[component]
pub fn ResultsGrid(grouped: Memo<GroupedView>) -> impl IntoView {
    view! {
        <div class="results">
            <h3>"解析結果"</h3>
            <Show
                when=move || !grouped.get().is_empty()
                fallback=|| view! {
                    <p class="text-muted">"検索条件に一致する結果はありません"</p>
                }
            >
                <div class="results-grid">
                    <For
                        each=move || grouped.get()
                        // 絞り込みで中身が変わったカードを作り直すため、件数と先頭も見る
                        key=|group| {
                            let first = group
                                .records
                                .first()
                                .map(|r| r.technique_name.clone())
                                .unwrap_or_default();
                            (group.category.clone(), group.total(), first)
                        }
                        children=move |group| view! { <CategoryCard group=group /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CategoryCard(group: CategoryGroup) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let total = group.total();
    let has_more = group.has_more();
    let category = group.category.clone();
    let records = group.records.clone();

    let visible = move || {
        let limit = if expanded.get() {
            records.len()
        } else {
            PREVIEW_LIMIT
        };
        records
            .iter()
            .take(limit)
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="category-card">
            <div class="category-header">
                <h4>{category}</h4>
            </div>
            <p class="category-count">{format!("{}件の手法を検出", total)}</p>
            <div class="techniques">
                <For
                    each=visible
                    key=|(idx, _)| *idx
                    children=move |(_, record)| {
                        let name = record.technique_name;
                        let description = record.description;
                        let url = record.url;
                        let has_description = !description.is_empty();
                        let has_url = !url.is_empty();
                        view! {
                            <div class="technique">
                                <h5>{name}</h5>
                                <Show when=move || has_description>
                                    <p class="technique-description">{description.clone()}</p>
                                </Show>
                                <Show when=move || has_url>
                                    <a
                                        class="technique-link"
                                        href=url.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        "参照 ↗"
                                    </a>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>
            <Show when=move || has_more && !expanded.get()>
                <button class="btn-link" on:click=move |_| set_expanded.set(true)>
                    {format!("全{}件を表示 →", total)}
                </button>
            </Show>
        </div>
    }
}
