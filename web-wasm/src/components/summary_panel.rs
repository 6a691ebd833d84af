//! 解析サマリパネルコンポーネント

use crate::app::UploadedFile;
use leptos::prelude::*;

#[component]
pub fn SummaryPanel<F>(
    file_info: ReadSignal<Option<UploadedFile>>,
    analyzed_at: ReadSignal<String>,
    on_export: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="summary-panel">
            <div class="summary-header">
                <h2>"解析サマリ"</h2>
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_export = on_export.clone();
                        move |_| on_export(())
                    }
                >
                    "レポートをエクスポート"
                </button>
            </div>
            <div class="summary-grid">
                <div>
                    <p class="label">"ファイル名"</p>
                    <p>{move || file_info.get().map(|f| f.name).unwrap_or_default()}</p>
                </div>
                <div>
                    <p class="label">"サイズ"</p>
                    <p>
                        {move || {
                            file_info
                                .get()
                                .map(|f| format!("{:.2} MB", f.size_mb))
                                .unwrap_or_else(|| "N/A".to_string())
                        }}
                    </p>
                </div>
                <div>
                    <p class="label">"種別"</p>
                    <p>
                        {move || {
                            file_info
                                .get()
                                .map(|f| {
                                    if f.mime_type.is_empty() {
                                        "不明".to_string()
                                    } else {
                                        f.mime_type
                                    }
                                })
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
                <div>
                    <p class="label">"解析日時"</p>
                    <p>{move || analyzed_at.get()}</p>
                </div>
            </div>
        </div>
    }
}
