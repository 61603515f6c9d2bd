//! Blocking browser alert for user-facing failures.

/// Show `message` in a native alert dialog. No-op off-browser.
pub fn show(message: &str) {
    #[cfg(feature = "browser")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = message;
    }
}
