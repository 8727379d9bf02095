//! `IntersectionObserver` wiring for the fade-in reveal.
//!
//! Marks every element matching the reveal selectors with `fade-up`, then
//! adds `animate-in` the first time each one is at least `threshold` visible
//! and stops observing it. Without `IntersectionObserver` support everything
//! is revealed immediately.

#[cfg(test)]
#[path = "reveal_observer_test.rs"]
mod reveal_observer_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::state::reveal::{RevealState, RevealTracker, Visibility};

/// Start observing `selector` matches. Returns how many elements were found.
pub fn install(selector: &str, threshold: f64) -> usize {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return 0;
        };
        let Ok(nodes) = document.query_selector_all(selector) else {
            return 0;
        };
        let elements: Vec<web_sys::Element> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect();
        for element in &elements {
            let _ = element.class_list().add_1(RevealState::Hidden.marker_class());
        }

        let count = elements.len();
        let tracker = Rc::new(RefCell::new(RevealTracker::new(count)));
        let elements = Rc::new(elements);

        let tracker_cb = Rc::clone(&tracker);
        let elements_cb = Rc::clone(&elements);
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = elements_cb.iter().position(|el| el.is_same_node(Some(target.as_ref()))) else {
                        continue;
                    };
                    let visibility = Visibility {
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    let mut tracker = tracker_cb.borrow_mut();
                    if tracker.observe(index, visibility, threshold) {
                        if let Some(state) = tracker.state(index) {
                            let _ = target.class_list().add_1(state.marker_class());
                        }
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                for element in elements.iter() {
                    observer.observe(element);
                }
                // The observer lives as long as the page.
                callback.forget();
            }
            Err(_) => {
                log::warn!("IntersectionObserver unavailable; revealing {count} sections immediately");
                for index in tracker.borrow_mut().reveal_all() {
                    let _ = elements[index].class_list().add_1(RevealState::Revealed.marker_class());
                }
            }
        }
        count
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (selector, threshold);
        0
    }
}
