//! Window measurements and blocking dialogs.
//!
//! Outside the browser every reading is `None` and dialogs are dropped.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_offset() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Current viewport width in CSS pixels.
pub fn inner_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Show a blocking `alert` with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
