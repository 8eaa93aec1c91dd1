//! # client
//!
//! Leptos + WASM frontend for the bill parser.
//!
//! This crate contains the page, components, session state and the HTTP
//! helpers for the proxy endpoints. The `server` crate renders it with SSR
//! and the `hydrate` build takes over in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
