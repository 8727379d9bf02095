//! Static page content: the photo wall, article list, and tag cloud.
//!
//! Everything here is compiled in. There is no loading step and no lifecycle
//! beyond process start.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// One photo on the photo wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Photo {
    pub id: u32,
    pub image_url: &'static str,
    pub caption: &'static str,
}

/// Accent color of an article's image block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArticleColor {
    Pink,
    Blue,
    Terracotta,
}

impl ArticleColor {
    /// CSS modifier class for the article image block.
    #[must_use]
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Terracotta => "terracotta",
        }
    }
}

/// One entry in the article list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Category label and date, already composed for display.
    pub tag: &'static str,
    pub color: ArticleColor,
    /// Font Awesome icon name, e.g. `fa-city`.
    pub icon: &'static str,
}

pub const PHOTOS: &[Photo] = &[
    Photo {
        id: 1,
        image_url: "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        caption: "Morning coffee",
    },
    Photo {
        id: 2,
        image_url: "https://images.unsplash.com/photo-1507842217343-583bb7270b66?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        caption: "A quiet afternoon in the library",
    },
    Photo {
        id: 3,
        image_url: "https://images.unsplash.com/photo-1506929562872-bb421503ef21?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        caption: "Sunset walk by the sea",
    },
    Photo {
        id: 4,
        image_url: "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        caption: "The green corner of the studio",
    },
    Photo {
        id: 5,
        image_url: "https://images.unsplash.com/photo-1513584684374-8bab748fbf90?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        caption: "City lights at night",
    },
    Photo {
        id: 6,
        image_url: "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        caption: "Snow mountain hike",
    },
    Photo {
        id: 7,
        image_url: "https://images.unsplash.com/photo-1504674900247-0877df9cc836?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        caption: "Homemade healthy breakfast",
    },
    Photo {
        id: 8,
        image_url: "https://images.unsplash.com/photo-1516724562728-afc824a36e84?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        caption: "Camera gear collection",
    },
    Photo {
        id: 9,
        image_url: "https://images.unsplash.com/photo-1499750310107-5fef28a66643?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        caption: "Reading and note-taking",
    },
];

pub const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "City Walks: Finding the Hidden Beauty of the Streets",
        excerpt: "Looking for the overlooked corners of a busy city and recording the side of it few people notice. From old buildings to street art, every spot has a story waiting to be found.",
        tag: "City walks • May 2023",
        color: ArticleColor::Pink,
        icon: "fa-city",
    },
    Article {
        id: 2,
        title: "The Art and Science of Pour-Over Coffee",
        excerpt: "From choosing beans to controlling water temperature, a look at the craft behind pour-over coffee, with my own recipe and a few tips for a better cup.",
        tag: "Coffee • April 2023",
        color: ArticleColor::Blue,
        icon: "fa-coffee",
    },
    Article {
        id: 3,
        title: "A Practical Guide to Minimalist Living",
        excerpt: "Staying simple and focused in the digital age. Notes from my own practice in managing belongings, tidying digital life, and clearing mental space.",
        tag: "Minimalism • March 2023",
        color: ArticleColor::Terracotta,
        icon: "fa-leaf",
    },
    Article {
        id: 4,
        title: "Photography Basics: Capturing Moments with Your Phone",
        excerpt: "No professional gear required. Composition, working with light, and the basics of editing for striking phone photos.",
        tag: "Photography • February 2023",
        color: ArticleColor::Pink,
        icon: "fa-camera",
    },
];

pub const TAGS: &[&str] = &[
    "Photography",
    "Coffee",
    "Minimalism",
    "City walks",
    "Reading",
    "Travel",
    "Food",
    "Design",
    "Music",
    "Writing",
    "Plants",
    "Crafts",
    "Gadgets",
    "Film",
    "Sports",
    "Meditation",
];
