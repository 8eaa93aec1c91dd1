//! Parsed-result card: variant header, summary, copy button, body.
//!
//! The json variant renders as two-space indented JSON in a `<pre>`; the
//! text variant renders raw with preserved line breaks. Copy writes exactly
//! the rendered text.

#[cfg(test)]
#[path = "result_viewer_test.rs"]
mod result_viewer_test;

use leptos::prelude::*;

use crate::net::types::{ParsedBill, ParsedResult, ResultKind};
use crate::state::copy::CopyFeedback;
use crate::state::session::SessionState;

pub(crate) fn kind_label(kind: ResultKind) -> &'static str {
    match kind {
        ResultKind::Json => "JSON Response",
        ResultKind::Text => "Text Response",
    }
}

pub(crate) fn kind_description(kind: ResultKind) -> &'static str {
    match kind {
        ResultKind::Json => "Structured data extracted from the bill",
        ResultKind::Text => "Text content extracted from the document",
    }
}

/// One-line overview of a structured bill, e.g. `Cafe Uno · 3 items · Total 42.50`.
/// `None` when the bill has none of those fields.
pub(crate) fn summary_line(bill: &ParsedBill) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(name) = bill.restaurant_name.as_deref().filter(|n| !n.trim().is_empty()) {
        parts.push(name.trim().to_owned());
    }
    if let Some(items) = &bill.items {
        let noun = if items.len() == 1 { "item" } else { "items" };
        parts.push(format!("{} {noun}", items.len()));
    }
    if let Some(total) = bill.grand_total {
        parts.push(format!("Total {total:.2}"));
    }
    if parts.is_empty() { None } else { Some(parts.join(" · ")) }
}

#[component]
pub fn ResultViewer() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let feedback = RwSignal::new(CopyFeedback::default());

    let parsed = move || session.get().parsed;

    let on_copy = move |_| {
        let Some(text) = session.with_untracked(|s| s.parsed.as_ref().map(ParsedResult::display_text)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::copy::copy_and_revert;

            let write = crate::util::clipboard::write_text(&text);
            if let Err(e) = copy_and_revert(&feedback, write, gloo_timers::future::sleep).await {
                log::warn!("copy to clipboard failed: {e}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, feedback);
        }
    };

    view! {
        <Show when=move || parsed().is_some()>
            {move || {
                parsed()
                    .map(|result| {
                        let kind = result.kind();
                        let body = result.display_text();
                        let summary = result.bill().as_ref().and_then(summary_line);
                        let body_class = match kind {
                            ResultKind::Json => "result__body result__body--json",
                            ResultKind::Text => "result__body result__body--text",
                        };
                        view! {
                            <section class="card result">
                                <header class="card__header">
                                    <h2 class="card__title">"Parsed Results"</h2>
                                    <p class="card__description">{kind_description(kind)}</p>
                                </header>
                                <div class="result__toolbar">
                                    <span class="result__kind">{kind_label(kind)}</span>
                                    <button
                                        type="button"
                                        class="button button--outline button--small"
                                        on:click=on_copy
                                    >
                                        {move || feedback.get().label()}
                                    </button>
                                </div>
                                {summary.map(|line| view! { <p class="result__summary">{line}</p> })}
                                <pre class=body_class>{body}</pre>
                            </section>
                        }
                    })
            }}
        </Show>
    }
}
