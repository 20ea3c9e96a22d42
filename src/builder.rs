use std::fs;
use std::path::{Path, PathBuf};

use spdlog::info;

use crate::config::Config;
use crate::content::store::FsContentStore;
use crate::error::FeedError;
use crate::feed::assembler::FeedAssembler;
use crate::view::rss_renderer::RssChannel;

#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    pub output: PathBuf,
    pub entries: usize,
}

fn content_store(config: &Config) -> FsContentStore {
    FsContentStore::new(config.paths.content_dir.clone(), &config.defaults.index_base_name)
}

/// Runs the whole pipeline and writes the feed document.
///
/// `output` overrides the location from the configuration.
pub fn build_feed(config: &Config, output: Option<&Path>) -> Result<BuildSummary, FeedError> {
    info!("Building feed from {}", config.posts_dir().display());

    let store = content_store(config);
    let feed = FeedAssembler::new(&store, &config.site)
        .with_collection(&config.feed.collection)
        .assemble()?;

    // An empty stylesheet disables the processing instruction
    let stylesheet = Some(config.feed.stylesheet.as_str()).filter(|s| !s.is_empty());
    let xml = RssChannel::from_feed(&feed, stylesheet).render(&feed.entries)?;

    let out_path = output.map(Path::to_path_buf).unwrap_or_else(|| config.feed_path());
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| FeedError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&out_path, xml).map_err(|source| FeedError::Io {
        path: out_path.clone(),
        source,
    })?;

    info!("Feed with {} entries written to {}", feed.entries.len(), out_path.display());

    Ok(BuildSummary {
        output: out_path,
        entries: feed.entries.len(),
    })
}

/// Validates every post without writing anything. Returns the number of valid posts.
pub fn check_posts(config: &Config) -> Result<usize, FeedError> {
    let store = content_store(config);
    let posts = FeedAssembler::new(&store, &config.site)
        .with_collection(&config.feed.collection)
        .load_posts()?;

    info!("{} posts are valid", posts.len());
    Ok(posts.len())
}
