//! Theme preference: read, apply, toggle.
//!
//! Reads the stored preference from `localStorage`, falling back to the
//! system `prefers-color-scheme`, and mirrors it onto the `data-theme`
//! attribute of `<html>`. Browser-only; SSR paths no-op so server rendering
//! stays deterministic.

use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "billscan_theme";

/// Load the initial UI state from the stored or system preference.
pub fn initial_ui_state() -> UiState {
    UiState { dark_mode: read_preference() }
}

/// Read the dark mode preference.
///
/// Returns `true` if the user previously chose dark, or if the system
/// prefers dark and nothing is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "dark";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(ui: &UiState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", ui.theme());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }
}

/// Flip the theme, apply it, and persist the choice.
pub fn toggle(ui: &mut UiState) {
    ui.dark_mode = !ui.dark_mode;
    apply(ui);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, ui.theme());
            }
        }
    }
}

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;
