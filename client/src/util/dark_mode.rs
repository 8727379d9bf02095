//! Theme persistence and application.
//!
//! Reads the saved preference, applies the `.dark-mode` class to `<body>`,
//! and on toggle writes the new value back before applying it, so the stored
//! and displayed themes never disagree.
//!
//! TRADE-OFFS
//! ==========
//! Applying the class is browser-only; SSR paths no-op and always render the
//! light theme, which hydration corrects once the preference is read.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::preferences::{PreferenceStore, read_theme, write_theme};
use crate::state::theme::{Theme, ThemeEvent};

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark-mode";

/// Add or remove the `.dark-mode` class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let class_list = body.class_list();
            if theme.is_dark() {
                let _ = class_list.add_1(DARK_CLASS);
            } else {
                let _ = class_list.remove_1(DARK_CLASS);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Restore the saved theme at startup and return it.
pub fn restore(store: &impl PreferenceStore, key: &str) -> Theme {
    let theme = read_theme(store, key);
    apply(theme);
    theme
}

/// Flip the theme, persist it, and apply it.
pub fn toggle(store: &impl PreferenceStore, key: &str, current: Theme) -> Theme {
    let next = current.handle(ThemeEvent::Toggle);
    write_theme(store, key, next);
    apply(next);
    next
}
