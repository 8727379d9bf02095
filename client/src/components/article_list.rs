//! Latest-articles section.

use leptos::prelude::*;

use crate::render::ArticleCard;

#[component]
pub fn ArticleList(cards: RwSignal<Vec<ArticleCard>>) -> impl IntoView {
    view! {
        <section class="articles-section" id="articles">
            <h3 class="section-title">"Latest Articles"</h3>
            <div class="articles-list">
                {move || {
                    cards
                        .get()
                        .into_iter()
                        .map(|card| {
                            view! {
                                <article class="article-card">
                                    <div class=card.image_class>
                                        <i class=card.icon_class></i>
                                    </div>
                                    <div class="article-content">
                                        <h4 class="article-title">{card.title}</h4>
                                        <p class="article-excerpt">{card.excerpt}</p>
                                        <div class="article-meta">
                                            <span class="article-tag">{card.meta}</span>
                                            <a href="#" class="article-read">
                                                "Read more "
                                                <i class="fas fa-arrow-right"></i>
                                            </a>
                                        </div>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
