use super::*;
use crate::config::PageConfig;
use crate::content::TAGS;

fn with_cloud(check: impl FnOnce(RwSignal<TagSelection>, RwSignal<Vec<TagChip>>, Notifier)) {
    let owner = Owner::new();
    owner.with(|| {
        let selection = RwSignal::new(TagSelection::new(TAGS.iter().copied()));
        let chips = RwSignal::new(Vec::new());
        selection.with_untracked(|s| {
            chips.update(|c| {
                render_tags(Some(c), s.labels(), s.active_index());
            });
        });
        check(selection, chips, Notifier::new(&PageConfig::default()));
    });
}

fn active_chips(chips: RwSignal<Vec<TagChip>>) -> Vec<usize> {
    chips.with_untracked(|c| c.iter().filter(|chip| chip.active).map(|chip| chip.index).collect())
}

// =============================================================
// select_tag
// =============================================================

#[test]
fn clicks_leave_only_last_chip_active() {
    with_cloud(|selection, chips, notifier| {
        for index in [3, 1, 5] {
            assert!(select_tag(selection, chips, notifier, index).is_some());
            assert_eq!(active_chips(chips), vec![index]);
        }
        assert_eq!(chips.with_untracked(Vec::len), TAGS.len());
        assert_eq!(active_chips(chips), vec![5]);
        assert_eq!(selection.with_untracked(TagSelection::active_index), Some(5));
    });
}

#[test]
fn click_announces_selected_tag() {
    with_cloud(|selection, chips, notifier| {
        let id = select_tag(selection, chips, notifier, 2).unwrap();
        notifier.state().with_untracked(|toasts| {
            assert_eq!(toasts.live_count(), 1);
            let live = toasts.current().unwrap();
            assert_eq!(live.id, id);
            assert_eq!(live.message, format!("Filtering by tag: {}", TAGS[2]));
        });
    });
}

#[test]
fn unknown_tag_changes_nothing() {
    with_cloud(|selection, chips, notifier| {
        select_tag(selection, chips, notifier, 4);
        assert_eq!(select_tag(selection, chips, notifier, TAGS.len()), None);
        assert_eq!(active_chips(chips), vec![4]);
        assert_eq!(notifier.state().with_untracked(|t| t.live_count()), 1);
    });
}
