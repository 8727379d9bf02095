//! Browser-facing helpers used by components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate storage, window, and observer calls from page and
//! component logic. Each one compiles to a no-op without `hydrate` so server
//! rendering stays deterministic.

pub mod dark_mode;
pub mod preferences;
pub mod reveal_observer;
pub mod viewport;
