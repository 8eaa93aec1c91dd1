//! Remaining-credits panel shown once a key is validated.

#[cfg(test)]
#[path = "credits_display_test.rs"]
mod credits_display_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Credits a fresh key starts with on the backend.
pub const MAX_CREDITS: u32 = 5;

/// Progress-bar fill for `credits`, clamped to 0..=100.
pub(crate) fn progress_percent(credits: u32) -> u32 {
    credits.min(MAX_CREDITS) * 100 / MAX_CREDITS
}

pub(crate) fn credits_message(credits: u32) -> String {
    if credits <= 1 {
        "Warning: You're running low on credits!".to_owned()
    } else {
        format!("You have {credits} out of {MAX_CREDITS} credits remaining")
    }
}

#[component]
pub fn CreditsDisplay() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let credits = move || session.get().credits;

    view! {
        <Show when=move || credits().is_some()>
            {move || {
                let remaining = credits().unwrap_or_default();
                let class = if remaining <= 1 { "credits credits--low" } else { "credits" };
                view! {
                    <div class=class>
                        <div class="credits__header">
                            <span class="credits__title">"API Credits Remaining"</span>
                            <span class="credits__count">{remaining}</span>
                        </div>
                        <div class="credits__bar">
                            <div
                                class="credits__fill"
                                style:width=format!("{}%", progress_percent(remaining))
                            ></div>
                        </div>
                        <p class="credits__message">{credits_message(remaining)}</p>
                    </div>
                }
            }}
        </Show>
    }
}
