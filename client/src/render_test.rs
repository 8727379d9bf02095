use super::*;
use crate::content::{ARTICLES, PHOTOS, TAGS};

// =============================================================
// Photos
// =============================================================

#[test]
fn render_photos_appends_one_card_per_photo_in_order() {
    let mut grid = Vec::new();
    let count = render_photos(Some(&mut grid), PHOTOS);
    assert_eq!(count, PHOTOS.len());
    assert_eq!(grid.len(), PHOTOS.len());
    let ids: Vec<u32> = grid.iter().map(|c| c.id).collect();
    let expected: Vec<u32> = PHOTOS.iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn photo_card_uses_caption_as_alt_text() {
    let card = PhotoCard::from(&PHOTOS[0]);
    assert_eq!(card.alt, PHOTOS[0].caption);
    assert_eq!(card.caption, PHOTOS[0].caption);
    assert_eq!(card.src, PHOTOS[0].image_url);
}

#[test]
fn rerender_replaces_previous_children() {
    let mut grid = vec![PhotoCard::from(&PHOTOS[8]); 4];
    render_photos(Some(&mut grid), PHOTOS);
    render_photos(Some(&mut grid), PHOTOS);
    assert_eq!(grid.len(), PHOTOS.len());
    assert_eq!(grid[0].id, PHOTOS[0].id);
}

#[test]
fn render_into_absent_container_is_noop() {
    assert_eq!(render_photos::<Vec<PhotoCard>>(None, PHOTOS), 0);
    assert_eq!(render_articles::<Vec<ArticleCard>>(None, ARTICLES), 0);
    assert_eq!(render_tags::<Vec<TagChip>, _>(None, TAGS, Some(0)), 0);
}

#[test]
fn render_empty_list_clears_container() {
    let mut grid = vec![PhotoCard::from(&PHOTOS[0])];
    assert_eq!(render_photos(Some(&mut grid), &[]), 0);
    assert!(grid.is_empty());
}

// =============================================================
// Articles
// =============================================================

#[test]
fn render_articles_keeps_order_and_builds_classes() {
    let mut list = Vec::new();
    assert_eq!(render_articles(Some(&mut list), ARTICLES), ARTICLES.len());
    assert_eq!(list[0].title, ARTICLES[0].title);
    assert_eq!(list[0].image_class, "article-image pink");
    assert_eq!(list[0].icon_class, "fas fa-city");
    assert_eq!(list[1].image_class, "article-image blue");
    assert_eq!(list[2].image_class, "article-image terracotta");
    assert_eq!(list[3].meta, ARTICLES[3].tag);
}

// =============================================================
// Tags
// =============================================================

#[test]
fn render_tags_marks_exactly_the_active_index() {
    let mut cloud = Vec::new();
    assert_eq!(render_tags(Some(&mut cloud), TAGS, Some(3)), TAGS.len());
    let active: Vec<usize> = cloud.iter().filter(|c| c.active).map(|c| c.index).collect();
    assert_eq!(active, vec![3]);
    assert_eq!(cloud[3].class(), "tag active");
    assert_eq!(cloud[0].class(), "tag");
}

#[test]
fn render_tags_without_active_marks_none() {
    let mut cloud = Vec::new();
    render_tags(Some(&mut cloud), &["a", "b"], None);
    assert!(cloud.iter().all(|c| !c.active));
}

#[test]
fn render_tags_rebuild_moves_active_marker() {
    let mut cloud = Vec::new();
    render_tags(Some(&mut cloud), TAGS, Some(0));
    render_tags(Some(&mut cloud), TAGS, Some(5));
    assert_eq!(cloud.len(), TAGS.len());
    assert!(!cloud[0].active);
    assert!(cloud[5].active);
    assert_eq!(cloud[5].label, TAGS[5]);
}
