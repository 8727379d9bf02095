//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and list sections while reading/writing
//! shared state from Leptos context providers.

pub mod article_list;
pub mod navbar;
pub mod notification;
pub mod photo_grid;
pub mod search_overlay;
pub mod tag_cloud;
