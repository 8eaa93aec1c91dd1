//! Drag-and-drop / click-to-select image picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hands the first picked or dropped file to `actions::upload_bill`, which
//! applies the key/credits/type guards before anything leaves the browser.
//! Shows a spinner while the parse is in flight and a preview of the last
//! picked image afterwards.

#[cfg(test)]
#[path = "file_upload_test.rs"]
mod file_upload_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::session::SessionState;
use crate::util::upload::ACCEPT_ATTR;

pub(crate) fn prompt_text(drag_active: bool) -> &'static str {
    if drag_active { "Drop the image here" } else { "Drag & drop a bill image, or click to select" }
}

pub(crate) fn dropzone_class(drag_active: bool, loading: bool) -> String {
    let mut class = String::from("dropzone");
    if drag_active {
        class.push_str(" dropzone--active");
    }
    if loading {
        class.push_str(" dropzone--disabled");
    }
    class
}

#[cfg(feature = "hydrate")]
fn start_upload(session: RwSignal<SessionState>, preview: RwSignal<Option<String>>, file: web_sys::File) {
    if session.with_untracked(|s| s.is_loading) {
        return;
    }
    if crate::util::upload::check_upload(&file).is_ok() {
        if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
            if let Some(old) = preview.get_untracked() {
                let _ = web_sys::Url::revoke_object_url(&old);
            }
            preview.set(Some(url));
        }
    }
    leptos::task::spawn_local(async move {
        crate::state::actions::upload_bill(&crate::net::api::ProxyApi, &session, &file).await;
    });
}

#[component]
pub fn FileUpload() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let preview = RwSignal::new(None::<String>);
    let drag_active = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let loading = move || session.get().is_loading;

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let file = input.files().and_then(|files| files.get(0));
            // Clear so picking the same file again still fires `change`.
            input.set_value("");
            if let Some(file) = file {
                start_upload(session, preview, file);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        #[cfg(feature = "hydrate")]
        {
            let file = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0));
            if let Some(file) = file {
                start_upload(session, preview, file);
            }
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !session.get_untracked().is_loading {
            drag_active.set(true);
        }
    };

    let on_click = move |_| {
        if session.get_untracked().is_loading {
            return;
        }
        #[cfg(feature = "hydrate")]
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class=move || dropzone_class(drag_active.get(), loading())
            on:click=on_click
            on:dragover=on_drag_over
            on:dragleave=move |_| drag_active.set(false)
            on:drop=on_drop
        >
            <input
                node_ref=input_ref
                class="dropzone__input"
                type="file"
                accept=ACCEPT_ATTR
                disabled=loading
                on:click=move |ev| ev.stop_propagation()
                on:change=on_change
            />
            {move || {
                if loading() {
                    view! {
                        <div class="dropzone__body">
                            <div class="spinner"></div>
                            <p class="dropzone__hint">"Processing your bill..."</p>
                        </div>
                    }
                        .into_any()
                } else if let Some(src) = preview.get() {
                    view! {
                        <div class="dropzone__body">
                            <img class="dropzone__preview" src=src alt="Bill preview"/>
                            <p class="dropzone__hint">"Click or drag to upload a different image"</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="dropzone__body">
                            <p class="dropzone__prompt">{move || prompt_text(drag_active.get())}</p>
                            <p class="dropzone__hint">"Supports JPG, JPEG, PNG"</p>
                            <span class="button button--outline button--small">"Select Image"</span>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
