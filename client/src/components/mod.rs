//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the parser flow and page chrome while reading/writing
//! shared state from Leptos context providers.

pub mod api_key_input;
pub mod credits_display;
pub mod file_upload;
pub mod navbar;
pub mod result_viewer;
pub mod theme_toggle;
