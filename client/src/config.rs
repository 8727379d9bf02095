//! Page behavior configuration.
//!
//! Thresholds and timings shared by the interactive controls. The server
//! loads a `PageConfig` at startup, renders `App` with it, and embeds it as
//! JSON in the shell so hydration starts from the same values. `App`
//! provides it through Leptos context; components read it with
//! `use_context` and fall back to the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Widest viewport (inclusive) treated as mobile for menu auto-close.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
/// Vertical scroll offset past which the navbar compacts.
pub const NAVBAR_COMPACT_OFFSET_PX: f64 = 50.0;
/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Total on-screen lifetime of a notification.
pub const NOTIFICATION_LIFETIME_MS: u32 = 3000;
/// Point in the lifetime at which the fade-out starts.
pub const NOTIFICATION_FADE_AT_MS: u32 = 2700;

/// Id of the `<script type="application/json">` element carrying the
/// server's `PageConfig` to the browser.
pub const EMBED_ELEMENT_ID: &str = "page-config";

/// Selectors of the page sections that fade in when scrolled into view.
pub const REVEAL_SELECTORS: &[&str] = &[
    ".intro-card",
    ".photo-grid-section",
    ".articles-section",
    ".tags-section",
    ".sidebar-card",
];

/// Which list sections the page layout includes.
///
/// A section that is not laid out has no container, so its renderer never
/// produces anything for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSections {
    pub photos: bool,
    pub articles: bool,
    pub tags: bool,
}

impl Default for PageSections {
    fn default() -> Self {
        Self { photos: true, articles: true, tags: true }
    }
}

/// Tunables for the page's scroll, visibility, menu, and notification behavior.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme_storage_key: String,
    pub mobile_breakpoint_px: f64,
    pub navbar_compact_offset_px: f64,
    pub reveal_threshold: f64,
    pub notification_lifetime_ms: u32,
    pub notification_fade_at_ms: u32,
    pub sections: PageSections,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            navbar_compact_offset_px: NAVBAR_COMPACT_OFFSET_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            notification_lifetime_ms: NOTIFICATION_LIFETIME_MS,
            notification_fade_at_ms: NOTIFICATION_FADE_AT_MS,
            sections: PageSections::default(),
        }
    }
}

impl PageConfig {
    /// Comma-joined selector list for `querySelectorAll`.
    #[must_use]
    pub fn reveal_selector() -> String {
        REVEAL_SELECTORS.join(", ")
    }

    /// Parse a (possibly partial) JSON override; missing fields keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// JSON for the embed element. `<` is escaped so the text cannot close
    /// the surrounding `<script>`.
    ///
    /// # Errors
    ///
    /// Returns the serialization error, if any.
    pub fn embedded_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }

    /// Read the config the server embedded in the page, or the defaults when
    /// it is missing or malformed.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(EMBED_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            log::warn!("no #{EMBED_ELEMENT_ID} element; using default page config");
            return Self::default();
        };
        Self::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("invalid page config ({e}); using defaults");
            Self::default()
        })
    }
}
