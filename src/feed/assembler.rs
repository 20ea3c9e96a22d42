use std::collections::HashMap;

use spdlog::{debug, error, info};

use crate::config::{SiteConfig, DEFAULT_COLLECTION};
use crate::content::store::ContentStore;
use crate::content::Post;
use crate::error::FeedError;
use crate::feed::{Feed, FeedEntry};

pub struct FeedAssembler<'a> {
    store: &'a dyn ContentStore,
    site: &'a SiteConfig,
    collection: &'a str,
}

impl<'a> FeedAssembler<'a> {
    pub fn new(store: &'a dyn ContentStore, site: &'a SiteConfig) -> Self {
        FeedAssembler {
            store,
            site,
            collection: DEFAULT_COLLECTION,
        }
    }

    pub fn with_collection(mut self, collection: &'a str) -> Self {
        self.collection = collection;
        self
    }

    /// Reads and validates every post of the collection, in retrieval order.
    ///
    /// All invalid documents are reported in one go.
    pub fn load_posts(&self) -> Result<Vec<Post>, FeedError> {
        let entries = self.store.get_collection(self.collection)?;
        info!("Collection {} has {} documents", self.collection, entries.len());

        let mut posts = Vec::with_capacity(entries.len());
        let mut errors = vec![];
        for entry in entries.iter() {
            match Post::from_entry(entry) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    error!("{}", e);
                    errors.push(e);
                }
            }
        }

        if errors.len() == 1 {
            return Err(errors.remove(0));
        }
        if !errors.is_empty() {
            return Err(FeedError::InvalidDocuments(errors));
        }

        check_unique_slugs(&posts)?;
        Ok(posts)
    }

    /// Builds the feed, newest post first. Posts with the same date keep their retrieval order.
    pub fn assemble(&self) -> Result<Feed, FeedError> {
        let mut posts = self.load_posts()?;
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        let entries: Vec<FeedEntry> = posts.iter()
            .map(|post| {
                let entry = FeedEntry::from(post);
                debug!("Feed entry {} ({})", entry.link, entry.pub_date);
                entry
            })
            .collect();

        Ok(Feed {
            site: self.site.clone(),
            entries,
        })
    }
}

fn check_unique_slugs(posts: &[Post]) -> Result<(), FeedError> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(posts.len());
    for post in posts {
        if let Some(first) = seen.insert(post.slug.as_str(), post.id.as_str()) {
            return Err(FeedError::DuplicateSlug {
                slug: post.slug.clone(),
                first: first.to_string(),
                second: post.id.clone(),
            });
        }
    }
    Ok(())
}
