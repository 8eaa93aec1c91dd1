//! API key field with show/hide toggle and a Validate button.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn ApiKeyInput() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let show_key = RwSignal::new(false);

    let on_input = move |ev| session.update(|s| s.set_api_key(event_target_value(&ev)));

    let on_validate = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::actions::validate_key(&crate::net::api::ProxyApi, &session).await;
        });
    };

    let validating = move || session.get().is_validating;

    view! {
        <div class="api-key">
            <label class="api-key__label" for="api-key">"API Key"</label>
            <div class="api-key__row">
                <div class="api-key__field">
                    <input
                        id="api-key"
                        class="api-key__input"
                        type=move || if show_key.get() { "text" } else { "password" }
                        placeholder="Enter your API key"
                        autocomplete="off"
                        prop:value=move || session.get().api_key
                        on:input=on_input
                    />
                    <button
                        type="button"
                        class="api-key__reveal"
                        title=move || if show_key.get() { "Hide key" } else { "Show key" }
                        on:click=move |_| show_key.update(|v| *v = !*v)
                    >
                        {move || if show_key.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
                <button
                    type="button"
                    class="button button--outline"
                    disabled=move || !session.get().can_validate()
                    on:click=on_validate
                >
                    {move || if validating() { "Validating..." } else { "Validate" }}
                </button>
            </div>
            <p class="api-key__hint">"Enter your API key to access the bill parsing service"</p>
        </div>
    }
}
