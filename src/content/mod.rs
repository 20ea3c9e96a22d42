use chrono::NaiveDateTime;

pub mod content_file;
pub mod parsing_utils;
pub mod schema;
pub mod store;

/// A raw document as returned by a [`store::ContentStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionEntry {
    /// Document path, used in diagnostics
    pub id: String,
    /// Slug derived from the document path
    pub slug: String,
    pub raw: String,
}

/// A blog post whose front matter satisfied the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub date: NaiveDateTime,
    pub short: String,
    pub tags: Vec<String>,
    pub image: String,
    pub body: String,
}
