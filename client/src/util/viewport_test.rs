#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn readings_are_absent_outside_the_browser() {
    assert_eq!(scroll_offset(), None);
    assert_eq!(inner_width(), None);
}

#[test]
fn alert_is_noop_but_callable() {
    alert("Search: coffee");
}
