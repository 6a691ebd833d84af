//! アップロードエリアコンポーネント
//!
//! 1回の投稿は1ファイル。新しい選択は進行中の結果を丸ごと置き換える。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, FileList};

#[component]
pub fn UploadArea<F>(
    is_analyzing: ReadSignal<bool>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(web_sys::File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let is_enabled = move || !is_analyzing.get();

    let handle_files = {
        let on_file_selected = on_file_selected.clone();
        move |files: FileList| {
            // 先頭の1ファイルだけを使う
            if let Some(file) = files.get(0) {
                on_file_selected(file);
            }
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if !is_enabled() {
                return;
            }

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    handle_files(files);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if is_enabled() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_files = handle_files.clone();
        move |_| {
            if !is_enabled() {
                return;
            }

            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_multiple(false);

            let input_for_change = input.clone();
            let handle_files = handle_files.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = input_for_change.files() {
                    handle_files(files);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if !is_enabled() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📦"</div>
            <p>"ファイルをドラッグ&ドロップ または クリックして選択"</p>
            <p class="text-muted">"実行ファイル・DLL・ドキュメントなど 50MBまで"</p>
        </div>
    }
}
