//! メインアプリケーションコンポーネント
//!
//! (result, query) を唯一の可変状態とし、平坦列・絞り込み列・
//! カテゴリ別ビューはすべてMemoによる純粋な再導出。
//! タイムライン再生のIntervalはここが唯一の所有者で、
//! 絞り込み列が変わる・アンマウントされるたびに必ず破棄される。

use crate::api;
use crate::components::{
    header::Header, results_grid::ResultsGrid, search_bar::SearchBar,
    summary_panel::SummaryPanel, timeline_view::TimelineView, upload_area::UploadArea,
};
use capascope_common::{
    filter_flat, filter_grouped, flatten, AnalysisResult, Tick, TimelineStepper,
    STEP_INTERVAL_MS,
};
use gloo::timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// アップロード済みファイルの表示用メタデータ
#[derive(Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub size_mb: f64,
    pub mime_type: String,
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (file_info, set_file_info) = signal(None::<UploadedFile>);
    let (is_analyzing, set_is_analyzing) = signal(false);
    let (analysis_complete, set_analysis_complete) = signal(false);
    let (result, set_result) = signal(None::<AnalysisResult>);
    let (query, set_query) = signal(String::new());
    let (error_message, set_error_message) = signal(None::<String>);
    let (analyzed_at, set_analyzed_at) = signal(String::new());
    let (stepper, set_stepper) = signal(TimelineStepper::new());

    // 進行中より新しいアップロードが来たら古い応答を破棄するための通し番号
    let request_seq = StoredValue::new(0u64);
    // 再生タイマー。生きているタイマーは常に1本以下
    let timer = StoredValue::new_local(None::<Interval>);

    // 派生構造は(result, query)が変わるたびに全体を再計算する
    let flat = Memo::new(move |_| {
        result.with(|r| r.as_ref().map(flatten).unwrap_or_default())
    });
    let filtered = Memo::new(move |_| {
        let q = query.get();
        flat.with(|f| filter_flat(f, &q))
    });
    let grouped = Memo::new(move |_| {
        let q = query.get();
        result.with(|r| {
            r.as_ref()
                .map(|r| filter_grouped(r, &q))
                .unwrap_or_default()
        })
    });

    // 絞り込み列が変わるたびに再生をやり直す。
    // 旧タイマーの破棄が先、状態のコミットが後。
    Effect::new(move |_| {
        let len = filtered.with(|f| f.len());
        let complete = analysis_complete.get();

        timer.update_value(|t| {
            t.take();
        });
        set_stepper.update(|s| s.reset(len));

        if complete && len > 0 {
            let started = set_stepper.try_update(|s| s.start()).unwrap_or(false);
            if started {
                let handle = Interval::new(STEP_INTERVAL_MS, move || {
                    let outcome = set_stepper.try_update(|s| s.tick()).unwrap_or(Tick::Ignored);
                    if outcome == Tick::Finished {
                        // 最終ステップ到達。タイマーを即時破棄する
                        timer.update_value(|t| {
                            t.take();
                        });
                    }
                });
                timer.set_value(Some(handle));
            }
        }
    });

    // アンマウント時もタイマーを残さない
    on_cleanup(move || {
        timer.update_value(|t| {
            t.take();
        });
    });

    // ファイル選択ハンドラ。前の結果は丸ごと置き換える
    let on_file_selected = move |file: web_sys::File| {
        set_file_info.set(Some(UploadedFile {
            name: file.name(),
            size_mb: file.size() / (1024.0 * 1024.0),
            mime_type: file.type_(),
        }));
        set_error_message.set(None);
        set_analysis_complete.set(false);
        set_result.set(None);
        set_is_analyzing.set(true);

        let seq = request_seq.with_value(|s| *s) + 1;
        request_seq.set_value(seq);

        spawn_local(async move {
            let outcome = api::analyze_file(&file).await;

            // 新しいアップロードが始まっていたら古い応答は捨てる
            if request_seq.with_value(|s| *s) != seq {
                return;
            }

            match outcome {
                Ok(result) => {
                    if let Some(message) = result.error() {
                        // アナライザ報告のエラーはメッセージをそのまま見せる
                        set_error_message.set(Some(message.to_string()));
                    }
                    set_analyzed_at.set(current_datetime());
                    set_result.set(Some(result));
                    set_is_analyzing.set(false);
                    set_analysis_complete.set(true);
                }
                Err(err) => {
                    // トランスポート失敗: 結果は設定せずアップロード前の状態に戻す
                    leptos::logging::error!("解析リクエスト失敗: {:?}", err);
                    set_is_analyzing.set(false);
                    set_file_info.set(None);
                    set_error_message.set(Some(
                        "解析に失敗しました。時間をおいて再試行してください。".to_string(),
                    ));
                }
            }
        });
    };

    // レポートエクスポート。結果がなければ何もしない
    let on_export = move |_| {
        if let Some(result) = result.get_untracked() {
            if let Err(err) = crate::export::download_report(&result) {
                leptos::logging::error!("エクスポート失敗: {:?}", err);
            }
        }
    };

    let has_findings = move || {
        analysis_complete.get() && result.with(|r| matches!(r, Some(r) if !r.is_error()))
    };

    view! {
        <div class="container">
            <Header />

            <UploadArea is_analyzing=is_analyzing on_file_selected=on_file_selected />

            <Show when=move || is_analyzing.get()>
                <div class="analyzing">
                    <div class="spinner"></div>
                    <p>"解析中..."</p>
                </div>
            </Show>

            <Show when=move || error_message.get().is_some()>
                <div class="error-banner">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <Show when=has_findings>
                <SummaryPanel file_info=file_info analyzed_at=analyzed_at on_export=on_export />
                <SearchBar query=query set_query=set_query />
                <ResultsGrid grouped=grouped />
                <TimelineView filtered=filtered stepper=stepper />
            </Show>
        </div>
    }
}

/// 現在日時のロケール表示
fn current_datetime() -> String {
    js_sys::Date::new_0()
        .to_locale_string("ja-JP", &wasm_bindgen::JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_default()
}
