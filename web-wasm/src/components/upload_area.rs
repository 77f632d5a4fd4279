//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとファイル選択の両方を受ける。入力チェックは呼び出し側。

use leptos::html::Input;
use leptos::prelude::*;
use sookshma_common::presentation::dashboard_copy as copy;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader, HtmlInputElement};

#[component]
pub fn UploadArea<F, D>(
    #[prop(into)] is_processing: Signal<bool>,
    #[prop(into)] drag_active: Signal<bool>,
    on_drag_change: D,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
    D: Fn(bool) + 'static + Clone,
{
    let input_ref = NodeRef::<Input>::new();

    let on_drop = {
        let on_file = on_file.clone();
        let on_drag_change = on_drag_change.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            on_drag_change(false);

            // 先頭の1枚だけ扱う
            if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
                on_file(file);
            }
        }
    };

    let on_dragover = {
        let on_drag_change = on_drag_change.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            on_drag_change(true);
        }
    };

    let on_dragleave = {
        let on_drag_change = on_drag_change.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            on_drag_change(false);
        }
    };

    let on_change = {
        let on_file = on_file.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file(file);
            }
            // 同じファイルを続けて選べるようにリセット
            input.set_value("");
        }
    };

    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area", "glass-card"];
                if drag_active.get() {
                    classes.push("dragover glow-safe");
                }
                classes.join(" ")
            }
            on:dragenter=on_dragover.clone()
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <Show
                when=move || is_processing.get()
                fallback=move || view! {
                    <div class="upload-icon">"📤"</div>
                    <h3>{copy::UPLOAD_TITLE}</h3>
                    <p class="text-muted">{copy::UPLOAD_HINT}</p>
                    <button class="btn btn-primary" on:click=open_picker>
                        {copy::SELECT_BUTTON}
                    </button>
                }
            >
                <div class="upload-icon spinner">"⏳"</div>
                <h3>{copy::PROCESSING_TITLE}</h3>
                <p class="text-muted">{copy::PROCESSING_HINT}</p>
            </Show>
            <input
                type="file"
                accept="image/*"
                class="hidden"
                node_ref=input_ref
                on:change=on_change
            />
        </div>
    }
}

/// ファイルを data URL として読み込み、完了時に `on_loaded` を呼ぶ
pub fn read_as_data_url<F>(file: &File, on_loaded: F)
where
    F: Fn(String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(err) => {
            web_sys::console::error_2(&"FileReader unavailable".into(), &err);
            return;
        }
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            on_loaded(data_url);
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(err) = reader.read_as_data_url(file) {
        web_sys::console::error_2(&"read_as_data_url failed".into(), &err);
    }
}
