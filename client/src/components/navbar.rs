//! Top navigation bar: links, search entry, theme toggle, and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the scroll listener that compacts the bar and the click handlers for
//! the theme and menu controls. State lives in the shared `UiState` signal.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::menu::MenuEvent;
use crate::state::navbar::NavbarState;
use crate::state::search::SearchEvent;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::preferences::BrowserStorage;
use crate::util::viewport;

#[derive(Clone, Copy)]
struct NavLink {
    href: &'static str,
    label: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#photos", label: "Photos" },
    NavLink { href: "#articles", label: "Articles" },
    NavLink { href: "#tags", label: "Tags" },
    NavLink { href: "#about", label: "About" },
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = use_context::<PageConfig>().unwrap_or_default();
    let breakpoint = config.mobile_breakpoint_px;
    let compact_offset = config.navbar_compact_offset_px;
    let storage_key = config.theme_storage_key;

    let sync_navbar = move || {
        let Some(offset) = viewport::scroll_offset() else {
            return;
        };
        if NavbarState::from_offset(offset, compact_offset) != ui.get_untracked().navbar {
            ui.update(|u| u.scrolled_to(offset, compact_offset));
        }
    };
    Effect::new(move || sync_navbar());
    let _scroll_listener = window_event_listener(leptos::ev::scroll, move |_| sync_navbar());

    let on_theme = move |_| {
        let next = dark_mode::toggle(&BrowserStorage, &storage_key, ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    let on_menu = move |_| ui.update(|u| u.menu_event(MenuEvent::ToggleClicked, breakpoint));

    let on_nav_link = move |_| {
        let viewport_width = viewport::inner_width().unwrap_or(f64::INFINITY);
        ui.update(|u| u.menu_event(MenuEvent::NavLinkActivated { viewport_width }, breakpoint));
    };

    let on_search = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|u| {
            u.search_event(SearchEvent::OpenClicked);
        });
    };

    view! {
        <nav class="navbar" class:shrink=move || ui.get().navbar.is_compact()>
            <div class="container navbar-content" style:padding=move || ui.get().navbar.content_padding()>
                <a href="#home" class="logo">"Petal"<span class="logo-dot">"."</span></a>

                <ul class="nav-menu" class:active=move || ui.get().menu.is_open()>
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.href class="nav-link" on:click=on_nav_link>
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li>
                        <a href="#" class="nav-link search-btn" on:click=on_search title="Search">
                            <i class="fas fa-search"></i>
                        </a>
                    </li>
                </ul>

                <div class="nav-actions">
                    <button id="themeToggle" class="theme-toggle" on:click=on_theme title="Toggle theme">
                        <i class=move || ui.get().theme.icon_class()></i>
                    </button>
                    <button id="mobileMenuBtn" class="mobile-menu-btn" on:click=on_menu title="Menu">
                        <i class=move || ui.get().menu.icon_class()></i>
                    </button>
                </div>
            </div>
        </nav>
    }
}
