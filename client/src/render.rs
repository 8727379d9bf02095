//! List rendering for the photo wall, article list, and tag cloud.
//!
//! Each `render_*` call clears its target and appends one view model per
//! record, in input order. Re-running a render rebuilds the list from
//! scratch. A `None` target means the page has no container for that section
//! and the call does nothing.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::content::{Article, Photo};

/// A list container that can be wiped and refilled.
pub trait Container {
    type Node;

    fn clear(&mut self);
    fn append(&mut self, node: Self::Node);
}

impl<T> Container for Vec<T> {
    type Node = T;

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, node: T) {
        self.push(node);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoCard {
    pub id: u32,
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleCard {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub meta: String,
    pub image_class: String,
    pub icon_class: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagChip {
    pub index: usize,
    pub label: String,
    pub active: bool,
}

impl TagChip {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.active { "tag active" } else { "tag" }
    }
}

impl From<&Photo> for PhotoCard {
    fn from(photo: &Photo) -> Self {
        Self {
            id: photo.id,
            src: photo.image_url.to_owned(),
            alt: photo.caption.to_owned(),
            caption: photo.caption.to_owned(),
        }
    }
}

impl From<&Article> for ArticleCard {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.to_owned(),
            excerpt: article.excerpt.to_owned(),
            meta: article.tag.to_owned(),
            image_class: format!("article-image {}", article.color.as_class()),
            icon_class: format!("fas {}", article.icon),
        }
    }
}

fn refill<C, I>(target: Option<&mut C>, nodes: I) -> usize
where
    C: Container,
    I: IntoIterator<Item = C::Node>,
{
    let Some(target) = target else {
        return 0;
    };
    target.clear();
    let mut count = 0;
    for node in nodes {
        target.append(node);
        count += 1;
    }
    count
}

/// Rebuild the photo wall. Returns the number of cards appended.
pub fn render_photos<C>(target: Option<&mut C>, photos: &[Photo]) -> usize
where
    C: Container<Node = PhotoCard>,
{
    refill(target, photos.iter().map(PhotoCard::from))
}

/// Rebuild the article list. Returns the number of cards appended.
pub fn render_articles<C>(target: Option<&mut C>, articles: &[Article]) -> usize
where
    C: Container<Node = ArticleCard>,
{
    refill(target, articles.iter().map(ArticleCard::from))
}

/// Rebuild the tag cloud with `active_index` marked active.
pub fn render_tags<C, S>(target: Option<&mut C>, labels: &[S], active_index: Option<usize>) -> usize
where
    C: Container<Node = TagChip>,
    S: AsRef<str>,
{
    refill(
        target,
        labels.iter().enumerate().map(|(index, label)| TagChip {
            index,
            label: label.as_ref().to_owned(),
            active: active_index == Some(index),
        }),
    )
}
