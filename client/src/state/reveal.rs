//! One-way fade-in reveal for page sections.
//!
//! Every observed element starts `Hidden`. The first visibility report at or
//! above the threshold moves it to `Revealed`, which is terminal: scrolling
//! the element back out of view never hides it again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// A single intersection report for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    /// Fraction of the element's area inside the viewport, `0.0..=1.0`.
    pub ratio: f64,
}

impl RevealState {
    #[must_use]
    pub fn observe(self, visibility: Visibility, threshold: f64) -> Self {
        match self {
            Self::Revealed => Self::Revealed,
            Self::Hidden if visibility.intersecting && visibility.ratio >= threshold => Self::Revealed,
            Self::Hidden => Self::Hidden,
        }
    }

    /// Class added to the element on entering this state. Classes
    /// accumulate, so a revealed element carries both.
    #[must_use]
    pub fn marker_class(self) -> &'static str {
        match self {
            Self::Hidden => "fade-up",
            Self::Revealed => "animate-in",
        }
    }
}

/// Reveal state for a fixed set of observed elements, addressed by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { states: vec![RevealState::Hidden; count] }
    }

    /// Record a report for element `index`. Returns `true` only on the
    /// report that reveals it; the caller can stop observing it then.
    pub fn observe(&mut self, index: usize, visibility: Visibility, threshold: f64) -> bool {
        let Some(state) = self.states.get_mut(index) else {
            return false;
        };
        let before = *state;
        *state = before.observe(visibility, threshold);
        before == RevealState::Hidden && *state == RevealState::Revealed
    }

    /// Reveal everything at once. Returns the indexes that changed.
    pub fn reveal_all(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        for (index, state) in self.states.iter_mut().enumerate() {
            if *state == RevealState::Hidden {
                *state = RevealState::Revealed;
                changed.push(index);
            }
        }
        changed
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }
}
