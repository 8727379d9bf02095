use super::*;

#[test]
fn default_is_hidden() {
    assert_eq!(SearchPanel::default(), SearchPanel::Hidden);
}

#[test]
fn open_then_close_button() {
    let (open, action) = SearchPanel::Hidden.handle(SearchEvent::OpenClicked);
    assert_eq!(open, SearchPanel::Visible);
    assert!(action.is_none());
    let (closed, action) = open.handle(SearchEvent::CloseClicked);
    assert_eq!(closed, SearchPanel::Hidden);
    assert!(action.is_none());
}

#[test]
fn backdrop_click_closes_but_content_click_does_not() {
    let (state, _) = SearchPanel::Visible.handle(SearchEvent::ContentClicked);
    assert_eq!(state, SearchPanel::Visible);
    let (state, _) = state.handle(SearchEvent::BackdropClicked);
    assert_eq!(state, SearchPanel::Hidden);
}

#[test]
fn whitespace_query_is_ignored_and_panel_stays_open() {
    let (state, action) = SearchPanel::Visible.handle(SearchEvent::Submitted("  ".to_owned()));
    assert_eq!(state, SearchPanel::Visible);
    assert!(action.is_none());
}

#[test]
fn empty_query_is_ignored() {
    let (state, action) = SearchPanel::Visible.handle(SearchEvent::Submitted(String::new()));
    assert_eq!(state, SearchPanel::Visible);
    assert!(action.is_none());
}

#[test]
fn query_announces_and_closes() {
    let (state, action) = SearchPanel::Visible.handle(SearchEvent::Submitted("coffee".to_owned()));
    assert_eq!(state, SearchPanel::Hidden);
    let Some(SearchAction::Announce(message)) = action else {
        panic!("expected an announcement");
    };
    assert!(message.contains("coffee"));
}

#[test]
fn announced_query_is_trimmed() {
    let (_, action) = SearchPanel::Visible.handle(SearchEvent::Submitted("  tea \n".to_owned()));
    assert_eq!(action, Some(SearchAction::Announce(search_message("tea"))));
}
