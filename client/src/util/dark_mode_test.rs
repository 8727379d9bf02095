use super::*;
use crate::util::preferences::{MemoryStore, PreferenceStore, read_theme};

const KEY: &str = "theme";

#[test]
fn restore_defaults_to_light_without_preference() {
    assert_eq!(restore(&MemoryStore::default(), KEY), Theme::Light);
}

#[test]
fn restore_reads_saved_dark() {
    assert_eq!(restore(&MemoryStore::with(KEY, "dark"), KEY), Theme::Dark);
}

#[test]
fn toggle_persists_new_theme() {
    let store = MemoryStore::default();
    let next = toggle(&store, KEY, Theme::Light);
    assert_eq!(next, Theme::Dark);
    assert_eq!(read_theme(&store, KEY), Theme::Dark);
}

#[test]
fn toggling_twice_restores_stored_and_applied_theme() {
    let store = MemoryStore::with(KEY, "light");
    let start = restore(&store, KEY);
    let once = toggle(&store, KEY, start);
    let twice = toggle(&store, KEY, once);
    assert_eq!(twice, start);
    assert_eq!(store.get(KEY).as_deref(), Some("light"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
