//! Tag cloud section with single-selection.
//!
//! Selecting a tag re-renders the chips with the new active marker, logs the
//! filter request, and raises a notification. Articles are not filtered.

#[cfg(test)]
#[path = "tag_cloud_test.rs"]
mod tag_cloud_test;

use leptos::prelude::*;

use super::notification::Notifier;
use crate::render::{TagChip, render_tags};
use crate::state::notification::NotificationId;
use crate::state::tags::{TagEvent, TagSelection};

/// Activate tag `index`, redraw `chips`, and announce the filter.
///
/// Returns the raised notification, or `None` when `index` is not a tag.
pub fn select_tag(
    selection: RwSignal<TagSelection>,
    chips: RwSignal<Vec<TagChip>>,
    notifier: Notifier,
    index: usize,
) -> Option<NotificationId> {
    let mut filter = None;
    selection.update(|s| filter = s.handle(TagEvent::Clicked(index)));
    let filter = filter?;
    selection.with_untracked(|s| {
        chips.update(|c| {
            render_tags(Some(c), s.labels(), s.active_index());
        });
    });
    let message = filter.message();
    #[cfg(feature = "hydrate")]
    log::info!("{message}");
    Some(notifier.notify(message))
}

#[component]
pub fn TagCloud(chips: RwSignal<Vec<TagChip>>, selection: RwSignal<TagSelection>) -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    view! {
        <section class="tags-section" id="tags">
            <h3 class="section-title">"Tags"</h3>
            <div class="tags-cloud">
                {move || {
                    chips
                        .get()
                        .into_iter()
                        .map(|chip| {
                            let index = chip.index;
                            let class = chip.class();
                            let label = chip.label;
                            let data_tag = label.clone();
                            view! {
                                <a
                                    href="#"
                                    class=class
                                    data-tag=data_tag
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.prevent_default();
                                        let _ = select_tag(selection, chips, notifier, index);
                                    }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
