//! Search overlay state.
//!
//! There is no search backend. A non-empty submission produces an
//! informational announcement and closes the overlay; an empty one is ignored.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchPanel {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// The navbar search link was clicked.
    OpenClicked,
    /// The close button inside the overlay was clicked.
    CloseClicked,
    /// A click landed on the overlay backdrop itself.
    BackdropClicked,
    /// A click landed inside the overlay content.
    ContentClicked,
    /// Enter was pressed in the search input.
    Submitted(String),
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchAction {
    /// Show this message to the user.
    Announce(String),
}

impl SearchPanel {
    #[must_use]
    pub fn handle(self, event: SearchEvent) -> (Self, Option<SearchAction>) {
        match event {
            SearchEvent::OpenClicked => (Self::Visible, None),
            SearchEvent::CloseClicked | SearchEvent::BackdropClicked => (Self::Hidden, None),
            SearchEvent::ContentClicked => (self, None),
            SearchEvent::Submitted(query) => {
                let query = query.trim();
                if query.is_empty() {
                    return (self, None);
                }
                (Self::Hidden, Some(SearchAction::Announce(search_message(query))))
            }
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// Announcement shown for a submitted query.
#[must_use]
pub fn search_message(query: &str) -> String {
    format!("Search: {query}\n\nSearch needs a backend and is not available on this static site.")
}
