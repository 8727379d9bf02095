//! Application state machines.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each interactive control on the page is modeled as a small value type with
//! a `handle`-style transition so it can be tested without a browser.
//! Components hold these in `RwSignal`s and apply transitions in event
//! handlers.

pub mod menu;
pub mod navbar;
pub mod notification;
pub mod reveal;
pub mod search;
pub mod tags;
pub mod theme;
pub mod ui;
