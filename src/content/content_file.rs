use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::content::CollectionEntry;
use crate::text_utils::slugify;

pub struct ContentFile {
    pub id: String,
    pub slug: String,
    pub file_path: PathBuf,
    pub raw_content: String,
}

impl ContentFile {
    pub fn from_file(collection: &str, collection_dir: &Path, file_path: PathBuf, index_base_name: &str) -> io::Result<ContentFile> {
        if !Self::guess_type(&file_path) {
            return Err(io::Error::new(ErrorKind::Unsupported, format!("Could not guess the type of the file {}", file_path.display())));
        }

        let rel_path = file_path.strip_prefix(collection_dir)
            .map_err(|_| io::Error::new(
                ErrorKind::InvalidInput,
                format!("File {} is outside of {}", file_path.display(), collection_dir.display())))?;

        let id = document_id(collection, collection_dir, &file_path);
        let slug = slug_from_path(rel_path, index_base_name);
        let raw_content = fs::read_to_string(&file_path)?;

        Ok(ContentFile {
            id,
            slug,
            file_path,
            raw_content,
        })
    }

    /// Markdown and MDX documents are the only content files.
    pub fn guess_type(file_name: &Path) -> bool {
        matches!(file_name.extension().and_then(|ext| ext.to_str()), Some("md") | Some("mdx"))
    }
}

impl From<ContentFile> for CollectionEntry {
    fn from(file: ContentFile) -> Self {
        CollectionEntry {
            id: file.id,
            slug: file.slug,
            raw: file.raw_content,
        }
    }
}

/// Id of a document used in diagnostics: `<collection>/<path inside the collection>`.
pub fn document_id(collection: &str, collection_dir: &Path, file_path: &Path) -> String {
    let rel_path = file_path.strip_prefix(collection_dir).unwrap_or(file_path);
    format!("{}/{}", collection, path_to_id(rel_path))
}

fn path_to_id(rel_path: &Path) -> String {
    rel_path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Derives the slug of a document from its path inside the collection.
///
/// `hello-world.md` gives `hello-world` and `hello-world/index.md` gives `hello-world`.
/// Nested directories are kept, `2023/Trip Notes.md` gives `2023/trip-notes`.
pub fn slug_from_path(rel_path: &Path, index_base_name: &str) -> String {
    let mut segments: Vec<String> = rel_path.parent()
        .map(|parent| {
            parent.components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part.to_string_lossy().to_string()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    if let Some(stem) = rel_path.file_stem() {
        let stem = stem.to_string_lossy();
        if stem != index_base_name || segments.is_empty() {
            segments.push(stem.to_string());
        }
    }

    segments.iter()
        .map(|segment| slugify(segment))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
