use super::*;

const KEY: &str = "theme";

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::default();
    assert_eq!(store.get(KEY), None);
    store.set(KEY, "dark");
    assert_eq!(store.get(KEY).as_deref(), Some("dark"));
    store.set(KEY, "light");
    assert_eq!(store.get(KEY).as_deref(), Some("light"));
}

#[test]
fn read_theme_defaults_to_light() {
    assert_eq!(read_theme(&MemoryStore::default(), KEY), Theme::Light);
}

#[test]
fn read_theme_restores_dark() {
    assert_eq!(read_theme(&MemoryStore::with(KEY, "dark"), KEY), Theme::Dark);
}

#[test]
fn read_theme_treats_garbage_as_light() {
    assert_eq!(read_theme(&MemoryStore::with(KEY, "sepia"), KEY), Theme::Light);
}

#[test]
fn write_theme_stores_plain_value() {
    let store = MemoryStore::default();
    write_theme(&store, KEY, Theme::Dark);
    assert_eq!(store.get(KEY).as_deref(), Some("dark"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_outside_the_browser() {
    BrowserStorage.set(KEY, "dark");
    assert_eq!(BrowserStorage.get(KEY), None);
}
