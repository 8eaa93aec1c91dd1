//! Light/dark theme switch.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            type="button"
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| ui.update(dark_mode::toggle)
        >
            {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
        </button>
    }
}
