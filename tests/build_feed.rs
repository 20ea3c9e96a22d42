use std::fs;
use std::path::Path;

use folio::builder::{build_feed, check_posts};
use folio::config::{parse_config, Config};
use folio::error::FeedError;

fn write_post(dir: &Path, name: &str, title: &str, date: &str, short: &str) {
    let doc = format!(
        "---\ntitle: {}\ndate: {}\nshort: {}\ntags: [kaggle]\nimage: ./cover.jpg\n---\n\nBody\n",
        title, date, short
    );
    fs::write(dir.join(name), doc).unwrap();
}

fn config_for(root: &Path) -> Config {
    let toml = format!(r##"
[site]
title = "Szacho"
description = "Machine learning notes"
url = "https://szacho.github.io"

[paths]
content_dir = "{}"
output_dir = "{}"
"##,
        root.join("content").display(),
        root.join("dist").display(),
    );
    parse_config(&toml).unwrap()
}

#[test]
fn build_writes_rss_document() {
    let root = tempfile::tempdir().unwrap();
    let posts = root.path().join("content").join("posts");
    fs::create_dir_all(&posts).unwrap();
    write_post(&posts, "a.md", "A", "2023-01-01", "sA");
    fs::create_dir(posts.join("b")).unwrap();
    write_post(&posts.join("b"), "index.mdx", "B", "2023-06-01", "sB");

    let config = config_for(root.path());
    let summary = build_feed(&config, None).unwrap();

    assert_eq!(summary.entries, 2);
    assert_eq!(summary.output, root.path().join("dist").join("rss.xml"));

    let xml = fs::read_to_string(&summary.output).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><?xml-stylesheet href="/rss-styles.xsl" type="text/xsl"?><rss version="2.0">"#));
    let b = xml.find("<link>https://szacho.github.io/posts/b/</link>").unwrap();
    let a = xml.find("<link>https://szacho.github.io/posts/a/</link>").unwrap();
    assert!(b < a);
    assert!(xml.contains("<description>sB</description><pubDate>Thu, 1 Jun 2023 00:00:00 +0000</pubDate><category>kaggle</category>"));

    // Same content, same document
    let again = build_feed(&config, Some(root.path().join("again.xml").as_path())).unwrap();
    assert_eq!(fs::read_to_string(again.output).unwrap(), xml);
}

#[test]
fn build_empty_collection() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("content").join("posts")).unwrap();

    let config = config_for(root.path());
    let summary = build_feed(&config, None).unwrap();
    assert_eq!(summary.entries, 0);
    assert!(fs::read_to_string(summary.output).unwrap().ends_with("<channel><title>Szacho</title><link>https://szacho.github.io</link><description>Machine learning notes</description></channel></rss>"));
}

#[test]
fn build_fails_on_invalid_post() {
    let root = tempfile::tempdir().unwrap();
    let posts = root.path().join("content").join("posts");
    fs::create_dir_all(&posts).unwrap();
    write_post(&posts, "a.md", "A", "2023-01-01", "sA");
    fs::write(posts.join("broken.md"), "---\ntitle: Broken\n---\n").unwrap();

    let config = config_for(root.path());
    match build_feed(&config, None) {
        Err(FeedError::Validation { document, errors }) => {
            assert_eq!(document, "posts/broken.md");
            assert_eq!(errors.len(), 4);
        }
        other => panic!("Unexpected result: {:?}", other),
    }
    assert!(!config.feed_path().exists());
    assert!(check_posts(&config).is_err());
}

#[test]
fn build_fails_without_collection() {
    let root = tempfile::tempdir().unwrap();
    let config = config_for(root.path());
    assert!(matches!(build_feed(&config, None), Err(FeedError::StoreUnreachable(_))));
}

#[test]
fn check_counts_valid_posts() {
    let root = tempfile::tempdir().unwrap();
    let posts = root.path().join("content").join("posts");
    fs::create_dir_all(&posts).unwrap();
    write_post(&posts, "a.md", "A", "2023-01-01", "sA");
    write_post(&posts, "b.md", "B", "2023-01-02", "sB");

    let config = config_for(root.path());
    assert_eq!(check_posts(&config).unwrap(), 2);
    assert!(!config.feed_path().exists());
}

#[test]
fn build_reports_non_utf8_post() {
    let root = tempfile::tempdir().unwrap();
    let posts = root.path().join("content").join("posts");
    fs::create_dir_all(&posts).unwrap();
    write_post(&posts, "a.md", "A", "2023-01-01", "sA");
    fs::write(posts.join("latin1.md"), b"---\ntitle: Caf\xe9\n---\n").unwrap();

    let config = config_for(root.path());
    match build_feed(&config, None) {
        Err(FeedError::FrontMatter { document, .. }) => assert_eq!(document, "posts/latin1.md"),
        other => panic!("Unexpected result: {:?}", other),
    }
}
