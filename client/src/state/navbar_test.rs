use super::*;

const THRESHOLD: f64 = 50.0;

#[test]
fn scroll_down_and_back_restores_default() {
    let top = NavbarState::from_offset(0.0, THRESHOLD);
    assert_eq!(top, NavbarState::Default);
    assert_eq!(top.content_padding(), "15px 0");

    let scrolled = NavbarState::from_offset(100.0, THRESHOLD);
    assert_eq!(scrolled, NavbarState::Compact);
    assert_eq!(scrolled.content_padding(), "8px 0");

    let back = NavbarState::from_offset(0.0, THRESHOLD);
    assert_eq!(back, NavbarState::Default);
    assert_eq!(back.content_padding(), "15px 0");
}

#[test]
fn threshold_itself_is_not_compact() {
    assert_eq!(NavbarState::from_offset(50.0, THRESHOLD), NavbarState::Default);
    assert_eq!(NavbarState::from_offset(50.5, THRESHOLD), NavbarState::Compact);
}

#[test]
fn negative_overscroll_is_default() {
    assert!(!NavbarState::from_offset(-20.0, THRESHOLD).is_compact());
}
