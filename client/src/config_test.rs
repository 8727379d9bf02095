use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn page_config_default_matches_constants() {
    let config = PageConfig::default();
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.mobile_breakpoint_px, 768.0);
    assert_eq!(config.navbar_compact_offset_px, 50.0);
    assert_eq!(config.reveal_threshold, 0.1);
    assert_eq!(config.notification_lifetime_ms, 3000);
    assert_eq!(config.notification_fade_at_ms, 2700);
}

#[test]
fn fade_starts_before_removal() {
    let config = PageConfig::default();
    assert!(config.notification_fade_at_ms < config.notification_lifetime_ms);
}

#[test]
fn page_sections_default_includes_everything() {
    let sections = PageSections::default();
    assert!(sections.photos);
    assert!(sections.articles);
    assert!(sections.tags);
}

#[test]
fn reveal_selector_joins_all_sections() {
    assert_eq!(
        PageConfig::reveal_selector(),
        ".intro-card, .photo-grid-section, .articles-section, .tags-section, .sidebar-card"
    );
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn partial_json_keeps_defaults_for_missing_fields() {
    let config: PageConfig =
        PageConfig::from_json(r#"{ "mobile_breakpoint_px": 600, "sections": { "tags": false } }"#).unwrap();
    assert_eq!(config.mobile_breakpoint_px, 600.0);
    assert_eq!(config.navbar_compact_offset_px, 50.0);
    assert!(config.sections.photos);
    assert!(!config.sections.tags);
}

#[test]
fn from_json_rejects_wrong_field_type() {
    assert!(PageConfig::from_json(r#"{ "notification_lifetime_ms": "soon" }"#).is_err());
}

// =============================================================
// Embedding
// =============================================================

#[test]
fn embedded_json_parses_back_to_same_config() {
    let mut config = PageConfig::default();
    config.sections.articles = false;
    let embedded = config.embedded_json().unwrap();
    assert_eq!(PageConfig::from_json(&embedded).unwrap(), config);
}

#[test]
fn embedded_json_cannot_close_script_element() {
    let config = PageConfig { theme_storage_key: "</script><b>".to_owned(), ..PageConfig::default() };
    let embedded = config.embedded_json().unwrap();
    assert!(!embedded.contains('<'));
    assert_eq!(PageConfig::from_json(&embedded).unwrap().theme_storage_key, "</script><b>");
}
