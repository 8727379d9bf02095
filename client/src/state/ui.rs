//! Page chrome state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each control owns an independent state machine; `UiState` only groups the
//! ones the navbar and search overlay read so a single `RwSignal` can be
//! provided. Tag selection and notifications live in their own signals.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::menu::{MenuEvent, MenuState};
use super::navbar::NavbarState;
use super::search::{SearchAction, SearchEvent, SearchPanel};
use super::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub menu: MenuState,
    pub search: SearchPanel,
    pub navbar: NavbarState,
}

impl UiState {
    pub fn menu_event(&mut self, event: MenuEvent, breakpoint: f64) {
        self.menu = self.menu.handle(event, breakpoint);
    }

    pub fn search_event(&mut self, event: SearchEvent) -> Option<SearchAction> {
        let (next, action) = self.search.handle(event);
        self.search = next;
        action
    }

    pub fn scrolled_to(&mut self, offset: f64, threshold: f64) {
        self.navbar = NavbarState::from_offset(offset, threshold);
    }
}
