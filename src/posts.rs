//! Demo Content Source
//!
//! Stand-in for the content framework collaborator: an ordered collection of
//! post records with pre-rendered body markup. The cover pipeline only ever
//! reads title, category, author, and the optional pre-rendered cover.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recipe::PostImageInputs;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    pub author: u32,
    pub url: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Pre-rendered body markup from the content framework.
    pub body_html: String,
}

impl Post {
    /// The subset of this record the cover pipeline consumes.
    pub fn image_inputs(&self) -> PostImageInputs {
        PostImageInputs {
            title: self.title.clone(),
            category: self.category.clone(),
            author: self.author,
            cover_image: self.cover_image.clone(),
        }
    }

    /// Publish date formatted for display, e.g. "April 12, 2023".
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

fn date(iso: &str) -> DateTime<Utc> {
    iso.parse().expect("demo post date is valid RFC 3339")
}

/// The demo posts, newest first.
pub fn demo_posts() -> Vec<Post> {
    let mut posts = vec![
        Post {
            title: "Dynamically Creating Blog Cover Images".into(),
            category: Some("dev".into()),
            author: 1,
            url: "/posts/dynamic-cover-images".into(),
            date: date("2023-04-12T00:00:00Z"),
            cover_image: None,
            body_html: "<p>Compose cover art from a post's title, category, \
                        and author instead of designing one per post.</p>"
                .into(),
        },
        Post {
            title: "A Week Away From the Keyboard".into(),
            category: Some("life".into()),
            author: 2,
            url: "/posts/week-away".into(),
            date: date("2023-03-28T00:00:00Z"),
            cover_image: None,
            body_html: "<p>Notes from a week of hiking with no laptop in the \
                        bag.</p>"
                .into(),
        },
        Post {
            title: "Typed Options vs. Hand-Built URLs".into(),
            category: None,
            author: 2,
            url: "/posts/typed-options".into(),
            date: date("2023-03-02T00:00:00Z"),
            cover_image: None,
            body_html: "<p>The same composition, written two ways.</p>".into(),
        },
        Post {
            title: "Announcing the Demo Blog".into(),
            category: Some("dev".into()),
            author: 1,
            url: "/posts/announcing".into(),
            date: date("2023-02-14T00:00:00Z"),
            cover_image: Some("demo blog cover images/launch-cover".into()),
            body_html: "<p>This one ships a hand-made cover, so no \
                        composition runs for it.</p>"
                .into(),
        },
    ];

    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}
