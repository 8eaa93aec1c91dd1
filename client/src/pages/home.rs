//! Parser page: key entry, credits, upload, errors, parsed result.

use leptos::prelude::*;

use crate::components::api_key_input::ApiKeyInput;
use crate::components::credits_display::CreditsDisplay;
use crate::components::file_upload::FileUpload;
use crate::components::result_viewer::ResultViewer;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let unlocked = move || {
        let s = session.get();
        !s.api_key.is_empty() && s.credits.is_some()
    };
    let error = move || session.get().error;

    view! {
        <main class="page">
            <section class="card">
                <header class="card__header">
                    <h1 class="card__title">"Bill Parser"</h1>
                    <p class="card__description">"Upload an image of a bill to extract the information"</p>
                </header>
                <div class="card__content">
                    <ApiKeyInput/>
                    <CreditsDisplay/>
                    <Show
                        when=unlocked
                        fallback=|| {
                            view! {
                                <div class="placeholder">
                                    "Please enter and validate your API key to upload bills"
                                </div>
                            }
                        }
                    >
                        <FileUpload/>
                    </Show>
                    <Show when=move || error().is_some()>
                        <div class="error-box" role="alert">{move || error().unwrap_or_default()}</div>
                    </Show>
                </div>
            </section>
            <ResultViewer/>
        </main>
    }
}
