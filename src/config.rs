use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

pub const DEFAULT_COLLECTION: &str = "posts";
pub const DEFAULT_STYLESHEET: &str = "/rss-styles.xsl";
pub const DEFAULT_FEED_FILE: &str = "rss.xml";

/// Site metadata copied into the feed channel.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    /// Base URL of the site, e.g. `https://example.github.io`
    pub url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Paths {
    pub content_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Defaults {
    pub index_base_name: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            index_base_name: "index".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FeedConfig {
    pub file_name: String,
    pub stylesheet: String,
    pub collection: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            file_name: DEFAULT_FEED_FILE.to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub site: SiteConfig,
    pub paths: Paths,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub feed: FeedConfig,
    pub log: Option<Log>,
}

impl Config {
    pub fn posts_dir(&self) -> PathBuf {
        self.paths.content_dir.join(&self.feed.collection)
    }

    pub fn feed_path(&self) -> PathBuf {
        self.paths.output_dir.join(&self.feed.file_name)
    }
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    if !path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent()
        .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "Executable has no parent directory"))?;
    let rest = path.strip_prefix("${exe_dir}")
        .map_err(|e| io::Error::new(ErrorKind::InvalidInput, e.to_string()))?;
    Ok(exe_dir.join(rest))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    if cfg.site.title.trim().is_empty() {
        return Err(io::Error::new(ErrorKind::InvalidData, "site.title must not be empty"));
    }
    if cfg.site.url.trim().is_empty() {
        return Err(io::Error::new(ErrorKind::InvalidData, "site.url must not be empty"));
    }

    cfg.paths = Paths {
        content_dir: parse_path(cfg.paths.content_dir)?,
        output_dir: parse_path(cfg.paths.output_dir)?,
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
