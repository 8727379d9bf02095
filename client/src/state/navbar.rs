//! Navbar compaction driven by scroll offset.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavbarState {
    #[default]
    Default,
    /// Reduced padding once the page is scrolled past the threshold.
    Compact,
}

impl NavbarState {
    /// Pure function of the current vertical offset; no hysteresis.
    #[must_use]
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold { Self::Compact } else { Self::Default }
    }

    #[must_use]
    pub fn is_compact(self) -> bool {
        self == Self::Compact
    }

    /// Padding applied to `.navbar-content`.
    #[must_use]
    pub fn content_padding(self) -> &'static str {
        match self {
            Self::Default => "15px 0",
            Self::Compact => "8px 0",
        }
    }
}
