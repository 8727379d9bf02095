//! Light/dark theme state.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// Page color theme. Serialized form matches the persisted preference value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Input events for the theme toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeEvent {
    Toggle,
}

impl Theme {
    /// Parse a stored preference. Only the exact value `"dark"` selects the
    /// dark theme; anything else, including no value, is light.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn handle(self, event: ThemeEvent) -> Self {
        match (self, event) {
            (Self::Light, ThemeEvent::Toggle) => Self::Dark,
            (Self::Dark, ThemeEvent::Toggle) => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon shown on the toggle: a sun while dark (click for light), a moon
    /// while light.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}
