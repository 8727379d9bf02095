//! # blog-client
//!
//! Leptos + WASM front end for the Petal personal blog page.
//!
//! The page is rendered on the server (`ssr`) and hydrated in the browser
//! (`hydrate`). Every interactive control is a plain state machine under
//! [`state`]; components in [`components`] wire browser events into those
//! machines and the `hydrate`-only helpers in [`util`] perform the actual
//! storage, observer, and timer calls.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod render;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    let config = config::PageConfig::from_document();
    log::debug!("hydrating blog page with {config:?}");
    leptos::mount::hydrate_body(move || view! { <App config=config.clone()/> });
}
