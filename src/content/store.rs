use std::io;
use std::path::{Path, PathBuf};

use spdlog::debug;
use thiserror::Error;

use crate::content::content_file::{document_id, slug_from_path, ContentFile};
use crate::content::CollectionEntry;
use crate::post_list::PostList;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("collection `{name}` not found in {}", .path.display())]
    MissingCollection {
        name: String,
        path: PathBuf,
    },

    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A document that was read but is not UTF-8 text
    #[error("{document} is not valid text: {reason}")]
    InvalidDocument {
        document: String,
        reason: String,
    },
}

/// Source of the documents of a site, grouped in named collections.
pub trait ContentStore {
    /// Returns the documents of a collection in a stable order.
    fn get_collection(&self, name: &str) -> Result<Vec<CollectionEntry>, StoreError>;
}

/// Collections stored as directories under a content root.
pub struct FsContentStore {
    pub root: PathBuf,
    pub index_base_name: String,
}

impl FsContentStore {
    pub fn new(root: PathBuf, index_base_name: &str) -> FsContentStore {
        FsContentStore {
            root,
            index_base_name: index_base_name.to_string(),
        }
    }
}

impl ContentStore for FsContentStore {
    fn get_collection(&self, name: &str) -> Result<Vec<CollectionEntry>, StoreError> {
        let collection_dir = self.root.join(name);
        if !collection_dir.is_dir() {
            return Err(StoreError::MissingCollection {
                name: name.to_string(),
                path: collection_dir,
            });
        }

        let post_list = PostList {
            root_dir: collection_dir.clone(),
            index_base_name: self.index_base_name.clone(),
        };
        let files = post_list.retrieve_all().map_err(|source| StoreError::Io {
            path: collection_dir.clone(),
            source,
        })?;

        let mut entries = Vec::with_capacity(files.len());
        for file_path in files {
            let content_file = ContentFile::from_file(name, &collection_dir, file_path.clone(), &self.index_base_name)
                .map_err(|source| match source.kind() {
                    io::ErrorKind::InvalidData => StoreError::InvalidDocument {
                        document: document_id(name, &collection_dir, &file_path),
                        reason: source.to_string(),
                    },
                    _ => StoreError::Io {
                        path: file_path,
                        source,
                    },
                })?;
            debug!("Loaded {} with slug {}", content_file.id, content_file.slug);
            entries.push(content_file.into());
        }

        Ok(entries)
    }
}

/// Collections kept in memory, in insertion order.
#[derive(Default)]
pub struct MemoryContentStore {
    collections: Vec<(String, Vec<CollectionEntry>)>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document, `id` being its path inside the collection (e.g. `hello/index.md`)
    pub fn add(&mut self, collection: &str, id: &str, raw: &str) -> &mut Self {
        let entry = CollectionEntry {
            id: format!("{}/{}", collection, id),
            slug: slug_from_path(Path::new(id), "index"),
            raw: raw.to_string(),
        };

        match self.collections.iter_mut().find(|(name, _)| name == collection) {
            Some((_, entries)) => entries.push(entry),
            None => self.collections.push((collection.to_string(), vec![entry])),
        }
        self
    }
}

impl ContentStore for MemoryContentStore {
    fn get_collection(&self, name: &str) -> Result<Vec<CollectionEntry>, StoreError> {
        let entries = self.collections.iter()
            .find(|(collection, _)| collection == name)
            .map(|(_, entries)| entries.clone())
            .unwrap_or_default();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_fs_store() -> io::Result<()> {
        let root = tempfile::tempdir()?;
        let posts = root.path().join("posts");
        fs::create_dir(&posts)?;
        fs::write(posts.join("Second Post.md"), "second")?;
        fs::create_dir(posts.join("first-post"))?;
        fs::write(posts.join("first-post").join("index.mdx"), "first")?;

        let store = FsContentStore::new(root.path().to_path_buf(), "index");
        let entries = store.get_collection("posts").unwrap();

        assert_eq!(entries, vec![
            CollectionEntry {
                id: "posts/Second Post.md".to_string(),
                slug: "second-post".to_string(),
                raw: "second".to_string(),
            },
            CollectionEntry {
                id: "posts/first-post/index.mdx".to_string(),
                slug: "first-post".to_string(),
                raw: "first".to_string(),
            },
        ]);
        Ok(())
    }

    #[test]
    fn test_fs_store_empty_collection() -> io::Result<()> {
        let root = tempfile::tempdir()?;
        fs::create_dir(root.path().join("posts"))?;

        let store = FsContentStore::new(root.path().to_path_buf(), "index");
        assert!(store.get_collection("posts").unwrap().is_empty());
        Ok(())
    }

    #[test]
    fn test_fs_store_missing_collection() -> io::Result<()> {
        let root = tempfile::tempdir()?;
        let store = FsContentStore::new(root.path().to_path_buf(), "index");

        let res = store.get_collection("posts");
        assert!(matches!(res, Err(StoreError::MissingCollection { ref name, .. }) if name == "posts"));
        Ok(())
    }

    #[test]
    fn test_fs_store_non_utf8_document() -> io::Result<()> {
        let root = tempfile::tempdir()?;
        let posts = root.path().join("posts");
        fs::create_dir(&posts)?;
        fs::write(posts.join("latin1.md"), b"---\ntitle: Caf\xe9\n---\n")?;

        let store = FsContentStore::new(root.path().to_path_buf(), "index");
        let res = store.get_collection("posts");
        assert!(matches!(res, Err(StoreError::InvalidDocument { ref document, .. }) if document == "posts/latin1.md"));
        Ok(())
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryContentStore::new();
        store.add("posts", "b.md", "b")
            .add("posts", "a/index.md", "a")
            .add("pages", "about.md", "about");

        let posts = store.get_collection("posts").unwrap();
        let ids: Vec<&str> = posts.iter().map(|e| e.id.as_str()).collect();
        let slugs: Vec<&str> = posts.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(ids, ["posts/b.md", "posts/a/index.md"]);
        assert_eq!(slugs, ["b", "a"]);

        assert!(store.get_collection("drafts").unwrap().is_empty());
    }
}
