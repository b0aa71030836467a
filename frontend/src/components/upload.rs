//! Upload form with drag & drop support.
//!
//! Captures one PDF or image and hands it to the parent right away. The
//! parent owns the upload itself: it tells the form whether a request is in
//! flight and which error to show.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::config::{is_accepted_mime, ACCEPT_ATTRIBUTE, ADVERTISED_MAX_FILE_SIZE};
use crate::presentation::format_file_size;

/// Name and size of the file last handed to the parent.
#[derive(Clone, Debug, PartialEq)]
struct SelectedFile {
    name: String,
    size: u64,
}

#[component]
pub fn UploadForm(
    /// Set by the parent while the submission request is in flight.
    #[prop(into)]
    uploading: Signal<bool>,
    /// Error banner text supplied by the parent.
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Called once per accepted file.
    #[prop(into)]
    on_file: Callback<File>,
) -> impl IntoView {
    let (selected, set_selected) = create_signal(None::<SelectedFile>);
    let (rejected, set_rejected) = create_signal(None::<String>);
    let (dragging, set_dragging) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let accept_file = move |file: File| {
        if uploading.get_untracked() {
            return;
        }
        let mime = file.type_();
        if !is_accepted_mime(&mime) {
            log::warn!("⚠️ Rejected {} ({})", file.name(), mime);
            let shown = if mime.is_empty() { "unknown".to_string() } else { mime };
            set_rejected.set(Some(format!("Unsupported file type: {}", shown)));
            return;
        }

        set_rejected.set(None);
        set_selected.set(Some(SelectedFile {
            name: file.name(),
            size: file.size() as u64,
        }));
        on_file.call(file);
    };

    // Handler pour le file picker
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            accept_file(file);
        }
        // Allow picking the same file again after an error
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !uploading.get_untracked() {
            set_dragging.set(true);
        }
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);

        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        if files.length() > 1 {
            log::warn!("⚠️ {} files dropped, only the first one is used", files.length());
        }
        if let Some(file) = files.get(0) {
            accept_file(file);
        }
    };

    let trigger_file_input = move |_| {
        if uploading.get_untracked() {
            return;
        }
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let content = move || {
        if let Some(message) = error.get() {
            return view! {
                <div class="upload-error">
                    <div class="upload-icon">"⚠️"</div>
                    <div class="error-message">{message}</div>
                    <div class="upload-hint">"Drop another file or click to try again"</div>
                </div>
            }
            .into_view();
        }

        match selected.get() {
            Some(file) => {
                let oversized = file.size > ADVERTISED_MAX_FILE_SIZE;
                view! {
                    <div class="upload-selected">
                        <div class="upload-icon">"📄"</div>
                        <div class="selected-name">{file.name}</div>
                        <div class="selected-size">{format_file_size(file.size)}</div>
                        <Show when=move || oversized fallback=|| view! {}>
                            <div class="upload-warning">
                                "This file is larger than 5 MB, the server may refuse it."
                            </div>
                        </Show>
                        <Show when=move || uploading.get() fallback=|| view! {}>
                            <div class="upload-progress">
                                <span class="spinner small"></span>
                                " Uploading..."
                            </div>
                        </Show>
                    </div>
                }
                .into_view()
            }
            None => view! {
                <div class="upload-idle">
                    <div class="upload-icon">"📤"</div>
                    <div class="upload-text">"Drop a PDF or an image here"</div>
                    <div class="upload-hint">"or click to select a file"</div>
                    <div class="upload-hint mt-20">"PDF, PNG, JPG, GIF, BMP • max 5MB"</div>
                </div>
            }
            .into_view(),
        }
    };

    view! {
        <div
            class="upload-section"
            class:dragging=move || dragging.get()
            class:disabled=move || uploading.get()
            on:click=trigger_file_input
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            {content}

            <Show when=move || rejected.get().is_some() fallback=|| view! {}>
                <div class="upload-rejected">{move || rejected.get().unwrap_or_default()}</div>
            </Show>

            <input
                type="file"
                accept=ACCEPT_ATTRIBUTE
                style="display:none"
                node_ref=file_input
                disabled=move || uploading.get()
                on:change=on_file_change
                on:click=|ev| ev.stop_propagation()
            />
        </div>
    }
}
