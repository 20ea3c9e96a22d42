use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::{fs, io};

use chrono::NaiveDate;
use serde::Serialize;

use crate::text_utils::slugify;

#[derive(Serialize)]
struct NewPostHeader<'a> {
    title: &'a str,
    date: String,
    short: &'a str,
    tags: Vec<String>,
    image: &'a str,
}

fn render_body() -> String {
    let mut buf = String::new();
    buf.push_str("This is a body example\n");
    buf.push_str("Please remove it and replace with your content\n");
    buf
}

/// A new post document whose front matter passes the schema.
pub fn new_post_document(title: &str, date: &NaiveDate) -> Result<String, serde_yaml::Error> {
    let header = NewPostHeader {
        title,
        date: date.format("%Y-%m-%d").to_string(),
        short: "",
        tags: vec![],
        image: "",
    };
    let yaml = serde_yaml::to_string(&header)?;

    Ok(format!("---\n{}---\n\n{}", yaml, render_body()))
}

pub fn post_file_name(title: &str) -> Option<String> {
    let slug = slugify(title);
    if slug.is_empty() {
        None
    } else {
        Some(format!("{}.md", slug))
    }
}

/// Writes a new post in the posts directory. Never overwrites an existing file.
pub fn create_post(posts_dir: &Path, title: &str, date: &NaiveDate) -> io::Result<PathBuf> {
    let file_name = post_file_name(title).ok_or_else(|| io::Error::new(
        ErrorKind::InvalidInput,
        format!("Title {:?} does not give a valid file name", title)))?;

    let document = new_post_document(title, date)
        .map_err(|e| io::Error::new(ErrorKind::InvalidData, e.to_string()))?;

    fs::create_dir_all(posts_dir)?;
    let path = posts_dir.join(file_name);
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| io::Error::new(e.kind(), format!("Unable to create {}: {}", path.display(), e)))?;
    file.write_all(document.as_bytes())?;

    Ok(path)
}
