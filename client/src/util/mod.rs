//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clipboard, theme
//! storage, file checks) from page and component logic.

pub mod clipboard;
pub mod dark_mode;
pub mod upload;
