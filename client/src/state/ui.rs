//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (theme) out of the session so the parser
//! flow and the page chrome can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the navbar and page shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    /// Theme name written to the `data-theme` attribute.
    pub fn theme(&self) -> &'static str {
        if self.dark_mode { "dark" } else { "light" }
    }
}
