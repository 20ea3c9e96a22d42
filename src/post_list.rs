use std::{fs, io};
use std::path::{Path, PathBuf};

use crate::content::content_file::ContentFile;

/// Lists the documents of a collection directory.
///
/// A document is either a `.md`/`.mdx` file directly in the directory, or a sub-directory
/// holding an index file (`<dir>/index.md`) next to its images.
pub struct PostList {
    pub root_dir: PathBuf,
    pub index_base_name: String,
}

impl PostList {
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if ContentFile::guess_type(&path) {
                posts.push(path);
            }
        }
        Ok(posts)
    }

    pub fn retrieve_dirs(&self) -> io::Result<Vec<PathBuf>> {
        let dirs = Self::list_dirs(self.root_dir.as_path())?;
        let mut post_files = vec![];
        for dir in dirs {
            if let Some(index_file) = Self::find_index(&dir, &self.index_base_name)? {
                post_files.push(index_file);
            }
        }
        Ok(post_files)
    }

    /// All documents, sorted by path so the retrieval order is stable across builds
    pub fn retrieve_all(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = self.retrieve_files()?;
        posts.extend(self.retrieve_dirs()?);
        posts.sort();
        Ok(posts)
    }

    fn list_dirs(posts_dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut dirs: Vec<PathBuf> = vec![];
        let entries = fs::read_dir(posts_dir)?;
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        Ok(dirs)
    }

    fn find_index(dir: &Path, base_name: &str) -> io::Result<Option<PathBuf>> {
        let mut candidates = vec![];
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let is_index = path.file_stem().is_some_and(|stem| stem == base_name);
            if is_index && ContentFile::guess_type(&path) {
                candidates.push(path);
            }
        }

        // index.md wins over index.mdx
        candidates.sort();
        Ok(candidates.into_iter().next())
    }
}
