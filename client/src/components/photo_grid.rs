//! Photo wall section.

use leptos::prelude::*;

use crate::render::PhotoCard;

#[component]
pub fn PhotoGrid(cards: RwSignal<Vec<PhotoCard>>) -> impl IntoView {
    view! {
        <section class="photo-grid-section" id="photos">
            <h3 class="section-title">"Photo Wall"</h3>
            <div class="photo-grid">
                {move || {
                    cards
                        .get()
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div class="photo-item">
                                    <img src=card.src alt=card.alt loading="lazy"/>
                                    <div class="photo-overlay">
                                        <p class="photo-caption">{card.caption}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
