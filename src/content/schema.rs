use chrono::NaiveDateTime;
use serde_yaml::{Mapping, Value};

use crate::content::parsing_utils::split_front_matter;
use crate::content::{CollectionEntry, Post};
use crate::error::{FeedError, FieldError, FieldErrorKind};
use crate::text_utils::{parse_date_time, slugify};

/// Typed front matter of a post.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub title: String,
    pub date: NaiveDateTime,
    pub short: String,
    pub tags: Vec<String>,
    pub image: String,
    /// Optional override of the slug derived from the file path
    pub slug: Option<String>,
}

/// Checks a raw front matter record against the post schema.
///
/// Every failing field is reported, not only the first one.
pub fn validate_front_matter(record: &Mapping) -> Result<FrontMatter, Vec<FieldError>> {
    let mut errors = vec![];

    let title = non_empty_text(record, "title", &mut errors);
    let date = date(record, "date", &mut errors);
    let short = text(record, "short", &mut errors);
    let tags = text_list(record, "tags", &mut errors);
    let image = text(record, "image", &mut errors);
    let slug = slug_override(record, &mut errors);

    match (title, date, short, tags, image) {
        (Some(title), Some(date), Some(short), Some(tags), Some(image)) if errors.is_empty() => Ok(FrontMatter {
            title,
            date,
            short,
            tags,
            image,
            slug,
        }),
        _ => Err(errors),
    }
}

impl Post {
    pub fn from_entry(entry: &CollectionEntry) -> Result<Post, FeedError> {
        let malformed = |reason: String| FeedError::FrontMatter {
            document: entry.id.clone(),
            reason,
        };

        let (front, body) = split_front_matter(&entry.raw).map_err(malformed)?;

        let value = if front.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str::<Value>(front)
                .map_err(|e| malformed(format!("Invalid YAML: {}", e)))?
        };

        let empty = Mapping::new();
        let record = match value {
            Value::Null => &empty,
            Value::Mapping(ref mapping) => mapping,
            _ => return Err(malformed("Front matter is not a key/value mapping".to_string())),
        };

        let front_matter = validate_front_matter(record).map_err(|errors| FeedError::Validation {
            document: entry.id.clone(),
            errors,
        })?;

        let slug = front_matter.slug.unwrap_or_else(|| entry.slug.clone());
        if slug.is_empty() {
            return Err(FeedError::Validation {
                document: entry.id.clone(),
                errors: vec![FieldError::new("slug", FieldErrorKind::Empty)],
            });
        }

        Ok(Post {
            id: entry.id.clone(),
            slug,
            title: front_matter.title,
            date: front_matter.date,
            short: front_matter.short,
            tags: front_matter.tags,
            image: front_matter.image,
            body: body.to_string(),
        })
    }
}

fn field<'a>(record: &'a Mapping, name: &str) -> Option<&'a Value> {
    match record.get(name) {
        None | Some(Value::Null) => None,
        Some(Value::Tagged(tagged)) => Some(&tagged.value),
        Some(value) => Some(value),
    }
}

fn required<'a>(record: &'a Mapping, name: &'static str, errors: &mut Vec<FieldError>) -> Option<&'a Value> {
    let value = field(record, name);
    if value.is_none() {
        errors.push(FieldError::new(name, FieldErrorKind::Missing));
    }
    value
}

fn text(record: &Mapping, name: &'static str, errors: &mut Vec<FieldError>) -> Option<String> {
    match required(record, name, errors)? {
        Value::String(s) => Some(s.clone()),
        _ => {
            errors.push(FieldError::new(name, FieldErrorKind::WrongType { expected: "text" }));
            None
        }
    }
}

fn non_empty_text(record: &Mapping, name: &'static str, errors: &mut Vec<FieldError>) -> Option<String> {
    let value = text(record, name, errors)?;
    if value.trim().is_empty() {
        errors.push(FieldError::new(name, FieldErrorKind::Empty));
        return None;
    }
    Some(value)
}

fn date(record: &Mapping, name: &'static str, errors: &mut Vec<FieldError>) -> Option<NaiveDateTime> {
    match required(record, name, errors)? {
        Value::String(s) => match parse_date_time(s) {
            Ok(date) => Some(date),
            Err(reason) => {
                errors.push(FieldError::new(name, FieldErrorKind::InvalidDate(reason)));
                None
            }
        },
        _ => {
            errors.push(FieldError::new(name, FieldErrorKind::WrongType { expected: "a date" }));
            None
        }
    }
}

fn text_list(record: &Mapping, name: &'static str, errors: &mut Vec<FieldError>) -> Option<Vec<String>> {
    let wrong_type = FieldError::new(name, FieldErrorKind::WrongType { expected: "a sequence of text" });

    let Value::Sequence(items) = required(record, name, errors)? else {
        errors.push(wrong_type);
        return None;
    };

    let mut list = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => list.push(s.clone()),
            _ => {
                errors.push(wrong_type);
                return None;
            }
        }
    }
    Some(list)
}

/// The override goes through the same slug rules as file paths, one `/` segment at a time.
fn slug_override(record: &Mapping, errors: &mut Vec<FieldError>) -> Option<String> {
    match field(record, "slug")? {
        Value::String(s) => {
            let slug = s.split('/')
                .map(slugify)
                .filter(|segment| !segment.is_empty())
                .collect::<Vec<_>>()
                .join("/");
            if slug.is_empty() {
                errors.push(FieldError::new("slug", FieldErrorKind::Empty));
                None
            } else {
                Some(slug)
            }
        }
        _ => {
            errors.push(FieldError::new("slug", FieldErrorKind::WrongType { expected: "text" }));
            None
        }
    }
}
