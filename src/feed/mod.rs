use chrono::NaiveDateTime;

use crate::config::SiteConfig;
use crate::content::Post;

pub mod assembler;

/// One item of the feed, derived from a post.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub link: String,
    pub title: String,
    pub pub_date: NaiveDateTime,
    pub description: String,
    pub categories: Vec<String>,
}

impl FeedEntry {
    pub fn post_link(slug: &str) -> String {
        format!("/posts/{}/", slug)
    }
}

impl From<&Post> for FeedEntry {
    fn from(post: &Post) -> Self {
        FeedEntry {
            link: Self::post_link(&post.slug),
            title: post.title.clone(),
            pub_date: post.date,
            description: post.short.clone(),
            categories: post.tags.clone(),
        }
    }
}

/// Site metadata plus the entries, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Feed {
    pub site: SiteConfig,
    pub entries: Vec<FeedEntry>,
}
