use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::content::store::StoreError;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldErrorKind {
    Missing,
    WrongType { expected: &'static str },
    Empty,
    InvalidDate(String),
}

/// A single front matter field that failed the post schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: &'static str, kind: FieldErrorKind) -> Self {
        FieldError { field, kind }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FieldErrorKind::Missing => write!(f, "`{}` is required", self.field),
            FieldErrorKind::WrongType { expected } => write!(f, "`{}` must be {}", self.field, expected),
            FieldErrorKind::Empty => write!(f, "`{}` must not be empty", self.field),
            FieldErrorKind::InvalidDate(reason) => write!(f, "`{}` is not a valid date: {}", self.field, reason),
        }
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid front matter in {document}: {}", join(.errors))]
    Validation {
        document: String,
        errors: Vec<FieldError>,
    },

    #[error("malformed document {document}: {reason}")]
    FrontMatter {
        document: String,
        reason: String,
    },

    #[error("{} documents failed validation: {}", .0.len(), join(.0))]
    InvalidDocuments(Vec<FeedError>),

    #[error("content store unreachable: {0}")]
    StoreUnreachable(StoreError),

    #[error("duplicate slug `{slug}` used by {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    #[error("error rendering feed: {0}")]
    Render(#[from] quick_xml::Error),

    #[error("error writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<StoreError> for FeedError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidDocument { document, reason } => FeedError::FrontMatter { document, reason },
            err => FeedError::StoreUnreachable(err),
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
