//! Fullscreen search overlay opened from the navbar.
//!
//! A click on the backdrop closes it; clicks inside the content box stop at
//! the box. Enter submits the query, which only produces an announcement.

use leptos::prelude::*;

use crate::state::search::{SearchAction, SearchEvent};
use crate::state::ui::UiState;
use crate::util::viewport;

#[component]
pub fn SearchOverlay() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let query = RwSignal::new(String::new());

    let dispatch = move |event: SearchEvent| {
        let mut action = None;
        ui.update(|u| action = u.search_event(event));
        if let Some(SearchAction::Announce(message)) = action {
            #[cfg(feature = "hydrate")]
            log::info!("search submitted without backend: {}", query.get_untracked().trim());
            viewport::alert(&message);
        }
    };

    let on_backdrop = move |_| dispatch(SearchEvent::BackdropClicked);
    let on_content = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        dispatch(SearchEvent::ContentClicked);
    };
    let on_close = move |_| dispatch(SearchEvent::CloseClicked);
    let on_keyup = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            dispatch(SearchEvent::Submitted(query.get_untracked()));
        }
    };

    view! {
        <div
            id="searchContainer"
            class="search-container"
            class:active=move || ui.get().search.is_visible()
            on:click=on_backdrop
        >
            <div class="search-box" on:click=on_content>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search articles, photos, tags..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    on:keyup=on_keyup
                />
                <button id="searchClose" class="search-close" on:click=on_close title="Close search">
                    <i class="fas fa-times"></i>
                </button>
            </div>
        </div>
    }
}
