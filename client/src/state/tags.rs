//! Tag cloud selection.
//!
//! Exactly one tag is active whenever the cloud is non-empty. Selecting a tag
//! only reports a filter request; articles carry no tag association, so
//! nothing is actually filtered.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagSelection {
    labels: Vec<String>,
    active: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagEvent {
    Clicked(usize),
}

/// Filter request emitted when a tag is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagFilter {
    pub label: String,
}

impl TagFilter {
    /// Text for the log line and the notification.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Filtering by tag: {}", self.label)
    }
}

impl TagSelection {
    /// Build a selection over `labels` with the first tag active.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let active = (!labels.is_empty()).then_some(0);
        Self { labels, active }
    }

    /// Activate the clicked tag. Out-of-range indexes change nothing.
    pub fn handle(&mut self, event: TagEvent) -> Option<TagFilter> {
        match event {
            TagEvent::Clicked(index) => {
                let label = self.labels.get(index)?.clone();
                self.active = Some(index);
                Some(TagFilter { label })
            }
        }
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
