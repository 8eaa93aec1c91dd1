//! Clipboard writes via `navigator.clipboard`.

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error string when the Clipboard API is unavailable or the
/// browser refuses the write. Always errors on the server.
pub async fn write_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let clipboard = web_sys::window()
            .map(|w| w.navigator().clipboard())
            .ok_or_else(|| "clipboard unavailable".to_owned())?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("not available on server".to_owned())
    }
}
