use super::*;

fn cloud() -> TagSelection {
    TagSelection::new(["Photography", "Coffee", "Travel", "Music"])
}

fn active_label(selection: &TagSelection) -> Option<&str> {
    selection.active_index().and_then(|i| selection.labels().get(i)).map(String::as_str)
}

#[test]
fn first_tag_is_active_initially() {
    let selection = cloud();
    assert_eq!(selection.active_index(), Some(0));
    assert_eq!(active_label(&selection), Some("Photography"));
}

#[test]
fn empty_cloud_has_no_active_tag() {
    let mut selection = TagSelection::new(Vec::<String>::new());
    assert_eq!(selection.active_index(), None);
    assert_eq!(selection.handle(TagEvent::Clicked(0)), None);
}

#[test]
fn click_activates_clicked_tag_and_reports_filter() {
    let mut selection = cloud();
    let filter = selection.handle(TagEvent::Clicked(2)).unwrap();
    assert_eq!(filter.label, "Travel");
    assert_eq!(filter.message(), "Filtering by tag: Travel");
    assert_eq!(selection.active_index(), Some(2));
}

#[test]
fn exactly_one_active_after_many_clicks() {
    let mut selection = cloud();
    for index in [3, 1, 1, 0, 2, 3, 1] {
        selection.handle(TagEvent::Clicked(index));
        assert_eq!(selection.active_index(), Some(index));
    }
    assert_eq!(active_label(&selection), Some("Coffee"));
}

#[test]
fn reclicking_active_tag_still_reports_filter() {
    let mut selection = cloud();
    let filter = selection.handle(TagEvent::Clicked(0));
    assert_eq!(filter.map(|f| f.label), Some("Photography".to_owned()));
    assert_eq!(selection.active_index(), Some(0));
}

#[test]
fn out_of_range_click_changes_nothing() {
    let mut selection = cloud();
    selection.handle(TagEvent::Clicked(1));
    assert_eq!(selection.handle(TagEvent::Clicked(99)), None);
    assert_eq!(selection.active_index(), Some(1));
}
