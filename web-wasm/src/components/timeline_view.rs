//! 検出タイムラインコンポーネント
//!
//! 絞り込み後の平坦列を擬似タイムラインとして表示し、
//! ステッパの現在位置をハイライトする。到達済みのステップは残る。

use capascope_common::{FlatEvent, Phase, TimelineStepper};
use leptos::prelude::*;

#[component]
pub fn TimelineView(
    filtered: Memo<Vec<FlatEvent>>,
    stepper: ReadSignal<TimelineStepper>,
) -> impl IntoView {
    let status_text = move || match stepper.get().phase() {
        Phase::Idle => "待機中",
        Phase::Ready => "再生準備",
        Phase::Running => "再生中",
        Phase::Finished => "再生完了",
    };

    view! {
        <div class="timeline">
            <h3>
                "検出タイムライン "
                <span class="timeline-status">{status_text}</span>
            </h3>
            <Show
                when=move || !filtered.get().is_empty()
                fallback=|| view! { <p class="text-muted">"再生する手法がありません"</p> }
            >
                <ol class="timeline-list">
                    <For
                        each={move || filtered.get().into_iter().enumerate().collect::<Vec<_>>()}
                        // 列の差し替えで行が再構築されるよう、内容込みのキーにする
                        key=|(idx, event)| (*idx, event.category.clone(), event.technique_name())
                        children=move |(idx, event)| {
                            let category = event.category.clone();
                            let name = {
                                let n = event.technique_name();
                                if n.is_empty() { "(名称なし)".to_string() } else { n }
                            };
                            let description = event.description();
                            let has_description = !description.is_empty();
                            let is_current = move || stepper.get().current_step() == idx;
                            let is_reached = move || stepper.get().current_step() >= idx;
                            view! {
                                <li
                                    class="timeline-item"
                                    class:current=is_current
                                    class:reached=is_reached
                                >
                                    <span class="timeline-category">{category}</span>
                                    <span class="timeline-name">{name}</span>
                                    <Show when=move || has_description>
                                        <span class="timeline-description">
                                            {description.clone()}
                                        </span>
                                    </Show>
                                </li>
                            }
                        }
                    />
                </ol>
            </Show>
        </div>
    }
}
