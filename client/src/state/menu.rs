//! Mobile navigation menu state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Open/closed state of the collapsible navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    /// The hamburger button was clicked.
    ToggleClicked,
    /// A navigation link was followed while the viewport had this width.
    NavLinkActivated { viewport_width: f64 },
}

impl MenuState {
    /// Apply `event`. Following a link closes the menu only on mobile-width
    /// viewports (`viewport_width <= breakpoint`).
    #[must_use]
    pub fn handle(self, event: MenuEvent, breakpoint: f64) -> Self {
        match event {
            MenuEvent::ToggleClicked => match self {
                Self::Closed => Self::Open,
                Self::Open => Self::Closed,
            },
            MenuEvent::NavLinkActivated { viewport_width } if viewport_width <= breakpoint => Self::Closed,
            MenuEvent::NavLinkActivated { .. } => self,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Glyph for the menu button.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Closed => "fas fa-bars",
            Self::Open => "fas fa-times",
        }
    }
}
