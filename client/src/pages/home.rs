//! The blog's single page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lays out the sections, fills the three lists once on load, and starts the
//! fade-in observer after hydration. Sections disabled in `PageSections` get
//! no container, so their renderer is handed `None`.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::article_list::ArticleList;
use crate::components::navbar::Navbar;
use crate::components::notification::NotificationHost;
use crate::components::photo_grid::PhotoGrid;
use crate::components::search_overlay::SearchOverlay;
use crate::components::tag_cloud::TagCloud;
use crate::config::PageConfig;
use crate::content::{ARTICLES, PHOTOS, TAGS};
use crate::render::{render_articles, render_photos, render_tags};
use crate::state::tags::TagSelection;
use crate::util::reveal_observer;

/// Run `render` against the slot's list, or against `None` when the section
/// is not on the page.
fn fill<T>(slot: Option<RwSignal<Vec<T>>>, render: impl FnOnce(Option<&mut Vec<T>>) -> usize) -> usize
where
    T: Send + Sync + 'static,
{
    match slot {
        Some(list) => {
            let mut count = 0;
            list.update(|nodes| count = render(Some(nodes)));
            count
        }
        None => render(None),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_context::<PageConfig>().unwrap_or_default();
    let sections = config.sections;
    let reveal_threshold = config.reveal_threshold;

    let photo_cards = sections.photos.then(|| RwSignal::new(Vec::new()));
    let article_cards = sections.articles.then(|| RwSignal::new(Vec::new()));
    let tag_chips = sections.tags.then(|| RwSignal::new(Vec::new()));
    let tag_selection = RwSignal::new(TagSelection::new(TAGS.iter().copied()));

    let photos = fill(photo_cards, |target| render_photos(target, PHOTOS));
    let articles = fill(article_cards, |target| render_articles(target, ARTICLES));
    let tags = tag_selection.with_untracked(|s| fill(tag_chips, |target| render_tags(target, s.labels(), s.active_index())));
    #[cfg(feature = "hydrate")]
    log::debug!("rendered {photos} photos, {articles} articles, {tags} tags");
    #[cfg(not(feature = "hydrate"))]
    let _ = (photos, articles, tags);

    Effect::new(move || {
        let observed = reveal_observer::install(&PageConfig::reveal_selector(), reveal_threshold);
        #[cfg(feature = "hydrate")]
        log::debug!("observing {observed} sections for reveal");
        #[cfg(not(feature = "hydrate"))]
        let _ = observed;
    });

    view! {
        <Navbar/>
        <SearchOverlay/>

        <main class="container main-content">
            <div class="content-grid">
                <div class="main-column">
                    <section class="intro-card" id="home">
                        <h2 class="intro-title">"Hi, welcome to my little corner"</h2>
                        <p class="intro-text">
                            "Photos, coffee, slow walks through the city, and notes on living with less."
                        </p>
                    </section>
                    {photo_cards.map(|cards| view! { <PhotoGrid cards/> })}
                    {article_cards.map(|cards| view! { <ArticleList cards/> })}
                </div>

                <aside class="sidebar">
                    {tag_chips.map(|chips| view! { <TagCloud chips selection=tag_selection/> })}
                    <div class="sidebar-card" id="about">
                        <h3 class="section-title">"About"</h3>
                        <p>"A designer who collects light, beans, and quiet afternoons."</p>
                    </div>
                </aside>
            </div>
        </main>

        <footer class="footer">
            <div class="container">
                <p>"© 2023 Petal. Made with coffee."</p>
            </div>
        </footer>

        <NotificationHost/>
    }
}
