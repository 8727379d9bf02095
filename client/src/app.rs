//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notification::Notifier;
use crate::config::{EMBED_ELEMENT_ID, PageConfig};
use crate::pages::home::HomePage;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::preferences::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is rendered into the page and embedded as JSON for the browser.
pub fn shell(options: LeptosOptions, config: PageConfig) -> impl IntoView {
    let embedded = config.embedded_json().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <script type="application/json" id=EMBED_ELEMENT_ID inner_html=embedded></script>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page configuration and shared state, and restores the saved
/// theme once hydrated.
#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let notifier = Notifier::new(&config);

    let storage_key = config.theme_storage_key.clone();
    Effect::new(move || {
        let theme = dark_mode::restore(&BrowserStorage, &storage_key);
        #[cfg(feature = "hydrate")]
        log::debug!("restored {} theme", theme.as_str());
        ui.update(|u| u.theme = theme);
    });

    provide_context(config);
    provide_context(ui);
    provide_context(notifier);

    view! {
        <Stylesheet id="leptos" href="/pkg/petal-blog.css"/>
        <Link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"/>
        <Title text="Petal · a personal blog"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
